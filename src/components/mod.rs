//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`login`] - Credentials form
//! - [`dashboard`] - Upload cards and upload history
//! - [`gallery`] - Per-kind listing with search, sort, preview
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dashboard;
pub mod gallery;
pub mod icons;
pub mod login;
pub mod router;

pub use router::AppRouter;
