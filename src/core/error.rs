//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ValidationError`] - Form input rejected before any network call
//! - [`ApiError`] - Network/HTTP errors from the remote service
//! - [`StorageError`] - localStorage operations for the upload history
//! - [`DownloadError`] - Rebuilding a file from an embedded payload
//! - [`AppError`] - Umbrella type surfaced at UI action boundaries

use thiserror::Error;

use crate::models::AssetKind;

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Username or password is blank
    #[error("Please fill in all fields")]
    MissingCredentials,
    /// No file selected or no name entered for an upload
    #[error("Please select a file and enter a {} name", .0.label().to_lowercase())]
    IncompleteUpload(AssetKind),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Any status other than 200
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body is not usable
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Upload history storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize upload history")]
    SerializationFailed,
    /// Failed to write to storage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// Errors rebuilding a downloadable file from a record's payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// Record carries no payload
    #[error("No file data available for download")]
    EmptyPayload,
    /// Payload is not valid base64
    #[error("File data is corrupted: {0}")]
    InvalidPayload(String),
    /// Blob or object URL could not be created
    #[error("Failed to prepare download")]
    BlobFailed,
}

/// Coarse classification used when reporting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Transport,
    Unknown,
}

/// Any error that can reach a UI action boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) => ErrorClass::Validation,
            Self::Api(_) => ErrorClass::Transport,
            Self::Storage(_) | Self::Download(_) => ErrorClass::Unknown,
        }
    }

    /// Whether the request reached the network before failing.
    pub fn reached_network(&self) -> bool {
        matches!(self, Self::Api(e) if !matches!(e, ApiError::NoWindow | ApiError::RequestCreationFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingCredentials.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::IncompleteUpload(AssetKind::Document).to_string(),
            "Please select a file and enter a document name"
        );
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::HttpError(500).to_string(), "HTTP error: 500");
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_app_error_classification() {
        let err: AppError = ValidationError::MissingCredentials.into();
        assert_eq!(err.class(), ErrorClass::Validation);
        assert!(!err.reached_network());

        let err: AppError = ApiError::HttpError(403).into();
        assert_eq!(err.class(), ErrorClass::Transport);
        assert!(err.reached_network());
        assert_eq!(err.to_string(), "HTTP error: 403");

        let err: AppError = ApiError::RequestCreationFailed.into();
        assert!(!err.reached_network());

        let err: AppError = DownloadError::EmptyPayload.into();
        assert_eq!(err.class(), ErrorClass::Unknown);
    }
}
