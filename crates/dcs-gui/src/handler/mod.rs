//! Message handlers for the Iced architecture.
//!
//! Each handler implements [`MessageHandler`] for one stage's message type
//! and is dispatched from `App::update`. Handlers translate messages into
//! [`Session`](dcs_session::Session) operations and spawn `Task::perform`
//! futures for the request descriptors the session hands back.

mod preview;
mod result;
mod upload;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use preview::PreviewHandler;
pub use result::ResultHandler;
pub use upload::{UploadHandler, refresh_recent};

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Process a message, mutating state and returning any follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
