//! Workflow-level errors surfaced to the user.

use dcs_api::ApiError;
use thiserror::Error;

/// Errors the session can surface in its error overlay.
///
/// Local validation failures short-circuit before any network call; remote
/// failures arrive wrapped in [`WorkflowError::Api`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkflowError {
    /// Upload submitted without a chosen file.
    #[error("no file selected")]
    NoFileSelected,

    /// Process submitted with an empty column selection.
    #[error("no columns selected")]
    EmptySelection,

    /// An operation was triggered while another call is outstanding.
    #[error("an operation is already in progress")]
    Busy,

    /// A backend operation failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session invariant violated (should not normally occur).
    #[error("internal error: {0}")]
    Internal(String),
}

impl WorkflowError {
    /// User-visible message for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoFileSelected => "Choose a file to upload first.",
            Self::EmptySelection => "Select at least one column before processing.",
            Self::Busy => "Please wait for the current operation to finish.",
            Self::Api(err) => err.user_message(),
            Self::Internal(_) => "Something went wrong. Please start over.",
        }
    }
}
