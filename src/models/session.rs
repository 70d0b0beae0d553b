//! Session-related types.
//!
//! The session itself is a cookie owned by the remote service; the client
//! only remembers which user the service reported.

/// Username and password entered on the login form. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Who the remote service says is logged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unknown,
    Resolving,
    Authenticated {
        username: String,
    },
}

impl SessionState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username),
            _ => None,
        }
    }

    /// Name for the dashboard greeting.
    pub fn display_name(&self) -> String {
        match self {
            Self::Authenticated { username } if !username.is_empty() => username.clone(),
            Self::Resolving => "loading...".to_string(),
            _ => "guest".to_string(),
        }
    }
}
