//! Login form handling.
//!
//! Blank fields are rejected before the service is contacted. The only
//! other check is the service's own answer.

use crate::core::api::AssetService;
use crate::core::error::{AppError, ValidationError};
use crate::models::Credentials;

/// Login form lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

/// Check that both fields are filled in.
///
/// Values are passed through untrimmed; only emptiness is judged on the
/// trimmed text.
pub fn validate(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Validate the form, then authenticate.
pub async fn authenticate<S: AssetService>(
    service: &S,
    username: &str,
    password: &str,
) -> Result<Credentials, AppError> {
    let credentials = validate(username, password)?;
    service.login(&credentials).await?;
    log::info!("logged in as {}", credentials.username);
    Ok(credentials)
}


#[cfg(test)]
mod tests {
    use super::mock::MockService;
    use super::*;
    use crate::core::error::ApiError;

    #[test]
    fn test_validate() {
        assert_eq!(
            validate("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate("alice", "   "),
            Err(ValidationError::MissingCredentials)
        );
        let creds = validate(" alice ", "pw").unwrap();
        assert_eq!(creds.username, " alice ");
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_the_service() {
        let service = MockService::default();
        for (user, pass) in [("", ""), ("alice", ""), ("", "pw"), (" ", "pw")] {
            let result = authenticate(&service, user, pass).await;
            assert_eq!(
                result,
                Err(AppError::Validation(ValidationError::MissingCredentials))
            );
        }
        assert_eq!(service.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_login() {
        let service = MockService::default();
        let creds = authenticate(&service, "alice", "secret").await.unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_rejected_login() {
        let service = MockService::failing(ApiError::HttpError(401));
        let result = authenticate(&service, "alice", "wrong").await;
        assert_eq!(result, Err(AppError::Api(ApiError::HttpError(401))));
        assert_eq!(service.calls.get(), 1);
    }
}
