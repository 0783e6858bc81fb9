//! Result stage message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, ResultMessage};
use crate::state::AppState;

/// Handler for Result stage messages.
pub struct ResultHandler;

impl MessageHandler<ResultMessage> for ResultHandler {
    fn handle(&self, state: &mut AppState, msg: ResultMessage) -> Task<Message> {
        match msg {
            ResultMessage::Download(variant) => {
                // Fire-and-forget side channel: the CSV opens in the system
                // browser and no response flows back into the session.
                if let (Some(request), Some(client)) =
                    (state.session.download_request(variant), &state.client)
                {
                    let url = client.download_url(request.file_id, request.variant);
                    tracing::info!("Opening download: {url}");
                    let _ = open::that(&url);
                }
                Task::none()
            }
        }
    }
}
