//! Core logic for the file client.
//!
//! This module provides:
//! - [`api`] - Remote service operations behind [`AssetService`]
//! - [`session`] - Login validation and authentication
//! - [`upload`] - The upload workflow used by every dashboard card
//! - [`history`] - Upload history persisted in localStorage
//! - [`gallery`] - Search, sort and local delete over fetched lists
//! - [`download`] - Rebuilding files from embedded payloads

pub mod api;
pub mod download;
pub mod error;
pub mod gallery;
pub mod history;
pub mod session;
pub mod upload;

pub use api::{ApiClient, AssetService};
