//! HTTP gateway to the cleaning backend.
//!
//! This crate encapsulates every network operation of the workflow behind
//! [`CleanerClient`] and translates transport, status, and decode failures
//! into the domain error kinds of [`ApiError`]. Nothing here owns session
//! state; callers sequence the operations.
//!
//! # Operations
//!
//! - [`CleanerClient::upload`] - multipart file upload
//! - [`CleanerClient::recent_uploads`] - listing of previously uploaded files
//! - [`CleanerClient::preview`] - detected columns with normalized keys
//! - [`CleanerClient::process`] - server-side cleaning of the selected columns
//! - [`CleanerClient::download_url`] - side-channel URL for the cleaned CSV

pub mod client;
pub mod error;
pub mod types;

pub use client::CleanerClient;
pub use error::{ApiError, Result};
pub use types::{Preview, ProcessAck, RecentUpload};
