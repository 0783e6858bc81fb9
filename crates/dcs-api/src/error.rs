//! Error kinds for backend operations.

use dcs_model::ColumnMapError;
use thiserror::Error;

/// Errors that can come out of a gateway operation.
///
/// Variants carry plain strings rather than source errors so they can be
/// cloned into UI messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for the log.
        body: String,
    },

    /// The response body could not be parsed.
    #[error("response decode error: {0}")]
    Decode(String),

    /// The preview payload is internally inconsistent.
    ///
    /// Raised when the column and normalized-key arrays cannot be zipped
    /// into a map. Fatal for the ingestion: no partial mapping is built.
    #[error("inconsistent preview: {0}")]
    Ingestion(#[from] ColumnMapError),

    /// Process was invoked with an empty column selection.
    ///
    /// Rejected locally; no request is issued.
    #[error("no columns selected")]
    EmptySelection,

    /// The file to upload could not be read from disk.
    #[error("could not read file: {0}")]
    Io(String),
}

impl ApiError {
    /// User-visible message for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => {
                "Could not reach the cleaning server. Check your connection and try again."
            }
            Self::Status { .. } => "The server could not handle the request. Please try again.",
            Self::Decode(_) => "The server sent an unexpected response.",
            Self::Ingestion(_) => {
                "The analysis of this file is inconsistent and its columns cannot be mapped."
            }
            Self::EmptySelection => "Select at least one column.",
            Self::Io(_) => "The chosen file could not be read.",
        }
    }

    /// Whether retrying the same action can plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::Io(_)
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.user_message().contains("connection"));

        let err = ApiError::EmptySelection;
        assert!(err.user_message().contains("at least one column"));

        let err = ApiError::Ingestion(ColumnMapError::LengthMismatch { labels: 3, keys: 2 });
        assert!(err.user_message().contains("cannot be mapped"));
    }

    #[test]
    fn retryable_classification() {
        assert!(ApiError::Network("timeout".to_string()).is_retryable());
        assert!(
            ApiError::Status {
                status: 502,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!ApiError::EmptySelection.is_retryable());
        assert!(
            !ApiError::Ingestion(ColumnMapError::LengthMismatch { labels: 1, keys: 0 })
                .is_retryable()
        );
    }
}
