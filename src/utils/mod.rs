//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`BoundedLog`] - Fixed-capacity newest-first log
//! - [`fetch`] - Cookie-carrying requests with timeout
//! - [`dom`] - Storage, dialogs, downloads
//! - [`format`] - Size and date formatting

mod bounded_log;
pub mod dom;
pub mod fetch;
pub mod format;

pub use bounded_log::BoundedLog;
