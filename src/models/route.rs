//! Hash-based routing.

use super::AssetKind;

/// Application routes.
///
/// URL format: `#/` (login), `#/dashboard`, `#/showImage`, `#/showVideo`,
/// `#/showDocument`, `#/showAudio`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Login form: `#/` or empty hash
    Login,
    /// Upload dashboard: `#/dashboard`
    Dashboard,
    /// Gallery for one asset kind: `#/showImage`, ...
    Gallery(AssetKind),
}

impl AppRoute {
    /// Parse URL hash into a route. Unknown paths fall back to `Login`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "dashboard" => Self::Dashboard,
            other => AssetKind::from_gallery_slug(other)
                .map(Self::Gallery)
                .unwrap_or(Self::Login),
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(self) -> String {
        match self {
            Self::Login => "#/".to_string(),
            Self::Dashboard => "#/dashboard".to_string(),
            Self::Gallery(kind) => format!("#/{}", kind.gallery_slug()),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route.
    ///
    /// Assigning `location.hash` adds a history entry and fires
    /// `hashchange`, which the router listens to.
    pub fn push(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("#/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/dashboard/"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_hash("#/showAudio"),
            AppRoute::Gallery(AssetKind::Audio)
        );
        assert_eq!(AppRoute::from_hash("#/nowhere"), AppRoute::Login);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Login.to_hash(), "#/");
        assert_eq!(AppRoute::Dashboard.to_hash(), "#/dashboard");
        for kind in AssetKind::ALL {
            let route = AppRoute::Gallery(kind);
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }
}
