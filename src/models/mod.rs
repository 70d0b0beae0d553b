//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AssetKind`], [`AssetRecord`] - Remote assets and their listing records
//! - [`UploadRecord`], [`UploadStatus`] - Client-local upload history
//! - [`Credentials`], [`SessionState`] - Login and current user
//! - [`AppRoute`] - Hash-based navigation
//! - [`ViewMode`], [`SortKey`] - Gallery view options

mod asset;
mod gallery;
mod history;
mod route;
mod session;

pub use asset::{AssetKind, AssetRecord};
pub use gallery::{SortKey, ViewMode};
pub use history::{UploadRecord, UploadStatus};
pub use route::AppRoute;
pub use session::{Credentials, SessionState};
