//! Client-local upload history entries.

use serde::{Deserialize, Serialize};

use super::AssetKind;

/// Outcome of an upload attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Failure,
}

impl UploadStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Status cell text for the history table.
    pub fn mark(self) -> &'static str {
        match self {
            Self::Success => "✓ Success",
            Self::Failure => "✗ Failed",
        }
    }
}

/// One upload attempt, as kept in browser storage.
///
/// JSON keys match what earlier builds of the client wrote to
/// `localStorage`, so existing histories keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub filename: String,
    pub size: u64,
    /// ISO-8601 timestamp of the attempt.
    pub date: String,
    pub status: UploadStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = UploadRecord {
            kind: AssetKind::Image,
            name: "cat".to_string(),
            filename: "cat.png".to_string(),
            size: 2048,
            date: "2026-01-02T03:04:05.000Z".to_string(),
            status: UploadStatus::Success,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Image");
        assert_eq!(value["status"], "success");
        assert_eq!(value["size"], 2048);
    }

    #[test]
    fn test_failure_status_parses() {
        let json = r#"{"type":"Audio","name":"a","filename":"a.mp3","size":1,"date":"x","status":"failure"}"#;
        let record: UploadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, UploadStatus::Failure);
        assert!(!record.status.is_success());
        assert_eq!(record.kind, AssetKind::Audio);
    }
}
