//! Upload stage message handler.
//!
//! Owns the upload → preview sequencing: the preview task is spawned from
//! the upload completion handler, never in parallel with it.

use iced::Task;

use dcs_model::UploadedFile;
use dcs_session::PreviewRequest;

use super::MessageHandler;
use crate::message::{Message, UploadMessage};
use crate::service;
use crate::state::AppState;

/// Handler for Upload stage messages.
pub struct UploadHandler;

impl MessageHandler<UploadMessage> for UploadHandler {
    fn handle(&self, state: &mut AppState, msg: UploadMessage) -> Task<Message> {
        match msg {
            UploadMessage::PickFile => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Spreadsheets", &["csv", "xls", "xlsx"])
                        .set_title("Choose a file to clean")
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                |path| Message::Upload(UploadMessage::FilePicked(path)),
            ),

            UploadMessage::FilePicked(path) => {
                if let Some(path) = path {
                    state.session.pick_file(path);
                }
                Task::none()
            }

            UploadMessage::Submit => {
                let Some(client) = state.client.clone() else {
                    return Task::none();
                };
                let request = match state.session.begin_upload() {
                    Ok(request) => request,
                    // Local validation failed; the session already surfaced
                    // the error and no call is issued.
                    Err(_) => return Task::none(),
                };

                let generation = request.generation;
                Task::perform(service::upload(client, request.path), move |result| {
                    Message::Upload(UploadMessage::UploadFinished { generation, result })
                })
            }

            UploadMessage::ExistingSelected(entry) => {
                if state.client.is_none() {
                    return Task::none();
                }
                let file = UploadedFile::new(entry.id, entry.original_filename);
                match state.session.begin_existing(file) {
                    Ok(request) => spawn_preview(state, request),
                    Err(_) => Task::none(),
                }
            }

            UploadMessage::UploadFinished { generation, result } => {
                match state.session.upload_finished(generation, result) {
                    Some(request) => spawn_preview(state, request),
                    None => Task::none(),
                }
            }

            UploadMessage::PreviewFinished { generation, result } => {
                state.session.preview_finished(generation, result);
                Task::none()
            }

            UploadMessage::RecentLoaded(result) => {
                match result {
                    Ok(entries) => {
                        tracing::debug!("Loaded {} recent upload(s)", entries.len());
                        state.recent = entries;
                    }
                    // The listing is a convenience; failures only cost the
                    // shortcut, so no error banner.
                    Err(err) => tracing::warn!("Could not list recent uploads: {err}"),
                }
                Task::none()
            }
        }
    }
}

/// Spawn the preview call for a request descriptor the session handed back.
fn spawn_preview(state: &AppState, request: PreviewRequest) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        return Task::none();
    };

    let generation = request.generation;
    Task::perform(service::preview(client, request.file_id), move |result| {
        Message::Upload(UploadMessage::PreviewFinished { generation, result })
    })
}

/// Task that refreshes the recent-uploads listing.
pub fn refresh_recent(state: &AppState) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        return Task::none();
    };

    Task::perform(service::recent_uploads(client), |result| {
        Message::Upload(UploadMessage::RecentLoaded(result))
    })
}
