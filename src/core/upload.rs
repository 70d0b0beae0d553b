//! Upload workflow shared by the four dashboard cards.
//!
//! validate → upload → record the attempt. A successful upload clears the
//! form; a failed one leaves it as the user filled it in.

use crate::core::api::{AssetService, FileSource};
use crate::core::error::{AppError, ValidationError};
use crate::core::history::UploadHistory;
use crate::models::{AssetKind, UploadRecord, UploadStatus};

/// Contents of one upload card.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm<F> {
    pub file: Option<F>,
    pub name: String,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            name: String::new(),
        }
    }
}

impl<F> UploadForm<F> {
    pub fn clear(&mut self) {
        self.file = None;
        self.name.clear();
    }

    /// The selected file and entered name, if both are present.
    pub fn validate(&self, kind: AssetKind) -> Result<(&F, &str), ValidationError> {
        match &self.file {
            Some(file) if !self.name.trim().is_empty() => Ok((file, self.name.as_str())),
            _ => Err(ValidationError::IncompleteUpload(kind)),
        }
    }
}

/// Result of [`submit`].
#[derive(Debug, PartialEq)]
pub enum UploadOutcome {
    /// Uploaded; the form was cleared.
    Uploaded(UploadRecord),
    /// The service or the network failed; the form was left untouched.
    Failed(UploadRecord, AppError),
}

impl UploadOutcome {
    /// The history entry for this attempt.
    ///
    /// Failures only count when a request actually went out.
    pub fn history_entry(&self) -> Option<&UploadRecord> {
        match self {
            Self::Uploaded(record) => Some(record),
            Self::Failed(record, error) if error.reached_network() => Some(record),
            Self::Failed(..) => None,
        }
    }
}

/// Add `outcome` to `history`. Returns whether an entry was recorded.
///
/// Apply this to the live history after the upload settles, so attempts
/// that overlap each land in the log.
pub fn record_outcome(history: &mut UploadHistory, outcome: &UploadOutcome) -> bool {
    match outcome.history_entry() {
        Some(record) => {
            history.record(record.clone());
            true
        }
        None => false,
    }
}

/// Run one upload.
///
/// Validation errors are returned as `Err` and leave the form untouched.
/// The outcome carries the attempt stamped with `timestamp`; adding it to
/// the history with [`record_outcome`] and persisting is up to the caller.
pub async fn submit<S: AssetService>(
    service: &S,
    kind: AssetKind,
    form: &mut UploadForm<S::File>,
    username: &str,
    timestamp: String,
) -> Result<UploadOutcome, ValidationError> {
    let (file, name) = form.validate(kind)?;

    let mut record = UploadRecord {
        kind,
        name: name.to_string(),
        filename: file.file_name(),
        size: file.size(),
        date: timestamp,
        status: UploadStatus::Success,
    };

    match service.upload(kind, file, name, username).await {
        Ok(()) => {
            form.clear();
            Ok(UploadOutcome::Uploaded(record))
        }
        Err(e) => {
            log::warn!("{} upload failed: {}", kind, e);
            record.status = UploadStatus::Failure;
            Ok(UploadOutcome::Failed(record, e.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::config::MAX_UPLOAD_HISTORY;
    use crate::core::error::ApiError;
    use crate::core::history;
    use crate::core::session::mock::{FakeFile, MockService};

    const TS: &str = "2026-03-04T05:06:07.000Z";

    fn filled(name: &str) -> UploadForm<FakeFile> {
        UploadForm {
            file: Some(FakeFile::new("clip.mp4", 4096)),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_validate() {
        let form: UploadForm<FakeFile> = UploadForm::default();
        assert_eq!(
            form.validate(AssetKind::Image),
            Err(ValidationError::IncompleteUpload(AssetKind::Image))
        );

        let blank_name = filled("  ");
        assert!(blank_name.validate(AssetKind::Video).is_err());

        let no_file = UploadForm::<FakeFile> {
            file: None,
            name: "x".to_string(),
        };
        assert!(no_file.validate(AssetKind::Video).is_err());

        assert!(filled("clip").validate(AssetKind::Video).is_ok());
    }

    #[tokio::test]
    async fn test_incomplete_form_makes_no_request() {
        let service = MockService::default();
        let mut form = filled("");

        let result = submit(&service, AssetKind::Video, &mut form, "alice", TS.into()).await;

        assert_eq!(result, Err(ValidationError::IncompleteUpload(AssetKind::Video)));
        assert_eq!(service.calls.get(), 0);
        assert!(form.file.is_some());
    }

    #[tokio::test]
    async fn test_success_records_and_clears() {
        let service = MockService::default();
        let mut form = filled("holiday");
        let mut log = history::empty();

        let outcome = submit(&service, AssetKind::Video, &mut form, "alice", TS.into())
            .await
            .unwrap();
        assert!(record_outcome(&mut log, &outcome));

        let UploadOutcome::Uploaded(record) = outcome else {
            panic!("expected success");
        };
        assert_eq!(record.filename, "clip.mp4");
        assert_eq!(record.size, 4096);
        assert_eq!(record.date, TS);
        assert_eq!(record.status, UploadStatus::Success);

        assert_eq!(log.len(), 1);
        assert_eq!(log.newest(), Some(&record));
        assert_eq!(form, UploadForm::default());

        let uploads = service.uploads.borrow();
        assert_eq!(
            uploads[0],
            (
                AssetKind::Video,
                "clip.mp4".to_string(),
                "holiday".to_string(),
                "alice".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_success_prepends_and_caps_history() {
        let service = MockService::default();
        let mut log = history::empty();

        for i in 0..MAX_UPLOAD_HISTORY + 3 {
            let mut form = filled(&format!("clip{}", i));
            let before = log.len();
            let outcome = submit(&service, AssetKind::Audio, &mut form, "alice", TS.into())
                .await
                .unwrap();
            record_outcome(&mut log, &outcome);
            assert_eq!(log.len(), (before + 1).min(MAX_UPLOAD_HISTORY));
            assert_eq!(log.newest().map(|r| r.name.clone()), Some(format!("clip{}", i)));
        }
        assert_eq!(log.len(), MAX_UPLOAD_HISTORY);
    }

    #[tokio::test]
    async fn test_overlapping_uploads_both_land_in_history() {
        let service = MockService::default();
        let shared = RefCell::new(history::empty());

        // Each card applies its own outcome to the live history once its
        // upload settles, the way the dashboard does.
        let card = |kind: AssetKind, name: &'static str| {
            let service = &service;
            let shared = &shared;
            async move {
                let mut form = filled(name);
                let outcome = submit(service, kind, &mut form, "alice", TS.into())
                    .await
                    .unwrap();
                record_outcome(&mut shared.borrow_mut(), &outcome);
            }
        };

        tokio::join!(card(AssetKind::Image, "cat"), card(AssetKind::Video, "clip"));

        let log = shared.into_inner();
        assert_eq!(log.len(), 2);
        let mut names: Vec<_> = log.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["cat", "clip"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_form_and_logs_attempt() {
        let service = MockService::failing(ApiError::HttpError(500));
        let mut form = filled("holiday");
        let mut log = history::empty();

        let outcome = submit(&service, AssetKind::Image, &mut form, "alice", TS.into())
            .await
            .unwrap();
        assert!(record_outcome(&mut log, &outcome));

        match outcome {
            UploadOutcome::Failed(record, err) => {
                assert_eq!(record.status, UploadStatus::Failure);
                assert_eq!(err, AppError::Api(ApiError::HttpError(500)));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(form, filled("holiday"));
        assert_eq!(log.len(), 1);
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_request_that_never_left_is_not_logged() {
        let service = MockService::failing(ApiError::RequestCreationFailed);
        let mut form = filled("holiday");
        let mut log = history::empty();

        let outcome = submit(&service, AssetKind::Document, &mut form, "alice", TS.into())
            .await
            .unwrap();

        assert!(matches!(outcome, UploadOutcome::Failed(_, _)));
        assert_eq!(outcome.history_entry(), None);
        assert!(!record_outcome(&mut log, &outcome));
        assert!(log.is_empty());
        assert_eq!(form, filled("holiday"));
    }
}
