//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task results flow through these
//! types. The `update` loop translates them into [`Session`] operations.
//!
//! [`Session`]: dcs_session::Session

use std::path::PathBuf;

use dcs_api::{ApiError, Preview, ProcessAck, RecentUpload};
use dcs_model::{UploadedFile, Variant};
use dcs_session::Generation;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Upload stage messages
    Upload(UploadMessage),

    /// Preview stage messages
    Preview(PreviewMessage),

    /// Result stage messages
    Result(ResultMessage),

    /// Discard the session and return to the Upload stage
    Reset,

    /// Dismiss the error banner
    DismissError,
}

/// Messages of the Upload stage.
#[derive(Debug, Clone)]
pub enum UploadMessage {
    /// Open the native file picker
    PickFile,

    /// File picker returned (None when cancelled)
    FilePicked(Option<PathBuf>),

    /// Upload the picked file
    Submit,

    /// A previously uploaded file was chosen from the recent list
    ExistingSelected(RecentUpload),

    /// Upload call completed
    UploadFinished {
        generation: Generation,
        result: Result<UploadedFile, ApiError>,
    },

    /// Preview call completed
    PreviewFinished {
        generation: Generation,
        result: Result<Preview, ApiError>,
    },

    /// Recent-uploads listing completed
    RecentLoaded(Result<Vec<RecentUpload>, ApiError>),
}

/// Messages of the Preview stage.
#[derive(Debug, Clone)]
pub enum PreviewMessage {
    /// A detected column was clicked, by raw label
    ColumnToggled(String),

    /// A selected column was removed, by normalized key
    ColumnRemoved(String),

    /// Move the selected column at this index one position up
    MoveUp(usize),

    /// Move the selected column at this index one position down
    MoveDown(usize),

    /// Generate-names checkbox toggled
    GenerateNamesToggled(bool),

    /// Ask the server to process the file
    Submit,

    /// Process call completed
    ProcessFinished {
        generation: Generation,
        result: Result<ProcessAck, ApiError>,
    },
}

/// Messages of the Result stage.
#[derive(Debug, Clone)]
pub enum ResultMessage {
    /// Open the cleaned CSV in the requested delimiter variant
    Download(Variant),
}
