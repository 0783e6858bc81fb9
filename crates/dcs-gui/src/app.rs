//! Main application module.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//! All workflow logic lives in `dcs-session`; this module only dispatches
//! messages to the stage handlers.

use iced::{Element, Task, Theme};

use crate::handler::{MessageHandler, PreviewHandler, ResultHandler, UploadHandler};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the startup
    /// task that fetches the recent-uploads listing.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let state = AppState::with_settings(settings);
        let startup = crate::handler::refresh_recent(&state);
        (Self { state }, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(msg) => UploadHandler.handle(&mut self.state, msg),

            Message::Preview(msg) => PreviewHandler.handle(&mut self.state, msg),

            Message::Result(msg) => ResultHandler.handle(&mut self.state, msg),

            Message::Reset => {
                self.state.session.reset();
                // The file just cleaned shows up in the listing afterwards.
                crate::handler::refresh_recent(&self.state)
            }

            Message::DismissError => {
                self.state.session.dismiss_error();
                Task::none()
            }
        }
    }

    /// Render the view for the current state.
    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view_root(&self.state)
    }

    /// Window title, reflecting stage and file.
    pub fn title(&self) -> String {
        let session = &self.state.session;
        match session.file() {
            Some(file) => format!(
                "{} ({}) - Data Cleaner Studio",
                file.original_filename,
                session.stage().label()
            ),
            None => "Data Cleaner Studio".to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        crate::theme::app_theme()
    }
}
