//! Identity of an uploaded file.

use serde::{Deserialize, Serialize};

/// A file the server has accepted and stored.
///
/// Returned by the upload operation and kept for the rest of the session;
/// every later call (preview, process, download) is keyed by [`id`].
///
/// [`id`]: UploadedFile::id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Server-assigned identifier.
    pub id: i64,
    /// Filename as the user uploaded it, for display.
    pub original_filename: String,
}

impl UploadedFile {
    /// Create a new uploaded-file record.
    pub fn new(id: i64, original_filename: impl Into<String>) -> Self {
        Self {
            id,
            original_filename: original_filename.into(),
        }
    }
}
