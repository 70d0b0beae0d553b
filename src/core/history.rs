//! Upload history persisted in localStorage.
//!
//! The history is read once when the dashboard mounts and overwritten
//! wholesale after every recorded attempt. It is never sent to the server.

use crate::config::{HISTORY_STORAGE_KEY, MAX_UPLOAD_HISTORY};
use crate::core::error::StorageError;
use crate::models::UploadRecord;
use crate::utils::{BoundedLog, dom};

/// Newest-first log of upload attempts.
pub type UploadHistory = BoundedLog<UploadRecord>;

/// An empty history with the configured capacity.
pub fn empty() -> UploadHistory {
    BoundedLog::new(MAX_UPLOAD_HISTORY)
}

/// Parse a stored history.
///
/// Malformed data yields an empty history; oversized data is cut to the
/// configured capacity.
pub fn decode(json: &str) -> UploadHistory {
    match serde_json::from_str::<Vec<UploadRecord>>(json) {
        Ok(records) => BoundedLog::from_newest_first(records, MAX_UPLOAD_HISTORY),
        Err(e) => {
            log::warn!("discarding unreadable upload history: {}", e);
            empty()
        }
    }
}

pub fn encode(history: &UploadHistory) -> Result<String, StorageError> {
    serde_json::to_string(history).map_err(|_| StorageError::SerializationFailed)
}

/// Load the history from localStorage. Missing or unreadable data yields an
/// empty history.
pub fn load() -> UploadHistory {
    dom::local_storage()
        .and_then(|s| s.get_item(HISTORY_STORAGE_KEY).ok().flatten())
        .map(|json| decode(&json))
        .unwrap_or_else(empty)
}

/// Overwrite the stored history.
pub fn save(history: &UploadHistory) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    let json = encode(history)?;
    storage
        .set_item(HISTORY_STORAGE_KEY, &json)
        .map_err(|_| StorageError::WriteFailed)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::{AssetKind, UploadStatus};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_then_load_from_local_storage() {
        let mut history = empty();
        history.record(UploadRecord {
            kind: AssetKind::Document,
            name: "report".to_string(),
            filename: "report.pdf".to_string(),
            size: 1,
            date: "2026-01-01T00:00:00.000Z".to_string(),
            status: UploadStatus::Failure,
        });

        save(&history).unwrap();
        assert_eq!(load(), history);
    }
}
