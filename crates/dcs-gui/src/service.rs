//! Async wrappers around the backend client for `Task::perform`.
//!
//! Each function takes an owned client clone and owned parameters so the
//! returned future is `'static`, as `Task::perform` requires.

use std::path::PathBuf;

use dcs_api::{ApiError, CleanerClient, Preview, ProcessAck, RecentUpload};
use dcs_model::UploadedFile;
use dcs_session::ProcessRequest;

/// Upload a file from disk.
pub async fn upload(client: CleanerClient, path: PathBuf) -> Result<UploadedFile, ApiError> {
    client.upload(&path).await
}

/// Fetch the column preview for an uploaded file.
pub async fn preview(client: CleanerClient, file_id: i64) -> Result<Preview, ApiError> {
    client.preview(file_id).await
}

/// Run the process call described by the session.
pub async fn process(
    client: CleanerClient,
    request: ProcessRequest,
) -> Result<ProcessAck, ApiError> {
    client
        .process(
            request.file_id,
            request.columns,
            request.generate_image_names,
        )
        .await
}

/// Fetch the recent-uploads listing.
pub async fn recent_uploads(client: CleanerClient) -> Result<Vec<RecentUpload>, ApiError> {
    client.recent_uploads().await
}
