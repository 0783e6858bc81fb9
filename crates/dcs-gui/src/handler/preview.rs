//! Preview stage message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, PreviewMessage};
use crate::service;
use crate::state::AppState;

/// Handler for Preview stage messages.
pub struct PreviewHandler;

impl MessageHandler<PreviewMessage> for PreviewHandler {
    fn handle(&self, state: &mut AppState, msg: PreviewMessage) -> Task<Message> {
        match msg {
            PreviewMessage::ColumnToggled(raw_label) => {
                state.session.toggle_column(&raw_label);
                Task::none()
            }

            PreviewMessage::ColumnRemoved(key) => {
                state.session.remove_column(&key);
                Task::none()
            }

            PreviewMessage::MoveUp(index) => {
                if index > 0 {
                    let _ = state.session.reorder(index, index - 1);
                }
                Task::none()
            }

            PreviewMessage::MoveDown(index) => {
                if index + 1 < state.session.selection().len() {
                    let _ = state.session.reorder(index, index + 1);
                }
                Task::none()
            }

            PreviewMessage::GenerateNamesToggled(enabled) => {
                state.session.set_generate_names(enabled);
                Task::none()
            }

            PreviewMessage::Submit => {
                let Some(client) = state.client.clone() else {
                    return Task::none();
                };
                let request = match state.session.begin_process() {
                    Ok(request) => request,
                    // Local validation failed; no call is issued.
                    Err(_) => return Task::none(),
                };

                let generation = request.generation;
                Task::perform(service::process(client, request), move |result| {
                    Message::Preview(PreviewMessage::ProcessFinished { generation, result })
                })
            }

            PreviewMessage::ProcessFinished { generation, result } => {
                state.session.process_finished(generation, result);
                Task::none()
            }
        }
    }
}
