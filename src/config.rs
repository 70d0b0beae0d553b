//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The remote API base URL can be overridden at build time through the
//! `ASSETDESK_API_URL` environment variable.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in page headers.
pub const APP_NAME: &str = "assetdesk";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL used when `ASSETDESK_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 30_000;

/// Base URL of the remote file service.
pub fn api_base_url() -> &'static str {
    match option_env!("ASSETDESK_API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Remote endpoint paths (relative to [`api_base_url`]).
pub mod endpoints {
    pub const LOGIN: &str = "/Login";
    pub const CURRENT_USER: &str = "/GetUser";

    pub const UPLOAD_IMAGE: &str = "/uploadsImage";
    pub const UPLOAD_VIDEO: &str = "/uploadsvideo";
    pub const UPLOAD_DOCUMENT: &str = "/uploadsDocument";
    pub const UPLOAD_AUDIO: &str = "/uploadsAudio";

    pub const LIST_IMAGE: &str = "/GetImage";
    pub const LIST_VIDEO: &str = "/Getvideo";
    pub const LIST_DOCUMENT: &str = "/Getdocument";
    pub const LIST_AUDIO: &str = "/GetAdio";
}

/// Multipart field names expected by the remote service.
pub mod form_fields {
    pub const LOGIN_USERNAME: &str = "UserName";
    pub const LOGIN_PASSWORD: &str = "Password";

    pub const FILE: &str = "file";
    pub const NAME: &str = "name";
    pub const USERNAME: &str = "username";
}

// =============================================================================
// Upload History
// =============================================================================

/// localStorage key for the upload history.
pub const HISTORY_STORAGE_KEY: &str = "uploadHistory";

/// Maximum number of upload history entries kept.
pub const MAX_UPLOAD_HISTORY: usize = 10;

// =============================================================================
// Gallery
// =============================================================================

/// Storage estimate shown in gallery stats, per listed asset.
pub const ESTIMATED_MB_PER_ASSET: f64 = 2.5;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
        assert!(api_base_url().starts_with("http"));
    }
}
