//! Views for the three workflow stages.
//!
//! Views are pure functions of the state. All interaction flows back through
//! [`Message`]; no view holds state of its own.

mod preview;
mod result;
mod upload;

use iced::widget::{Space, button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

use dcs_session::Stage;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{GRAY_500, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS};

pub use preview::view_preview;
pub use result::view_result;
pub use upload::view_upload;

/// Render the whole window: header, error banner, current stage.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let header = view_header(state);

    let stage_content: Element<'_, Message> = if state.client.is_none() {
        view_no_client()
    } else {
        match state.session.stage() {
            Stage::Upload => view_upload(state),
            Stage::Preview => view_preview(state),
            Stage::Result => view_result(state),
        }
    };

    let mut page = column![header, rule::horizontal(1)].spacing(SPACING_MD);

    if let Some(error) = state.session.error() {
        page = page.push(view_error_banner(error.user_message()));
    }

    page = page.push(scrollable(stage_content).height(Length::Fill));

    container(page.padding(SPACING_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Application header with name and backend location.
fn view_header(state: &AppState) -> Element<'_, Message> {
    row![
        text("Data Cleaner Studio").size(20),
        Space::new().width(Length::Fill),
        text(&state.settings.server_url).size(12).color(GRAY_500),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Dismissable error banner above the stage content.
fn view_error_banner(message: &str) -> Element<'_, Message> {
    let content = row![
        text(message).size(14),
        Space::new().width(Length::Fill),
        button(text("Dismiss").size(12))
            .on_press(Message::DismissError)
            .style(crate::theme::button_secondary)
            .padding([SPACING_XS, SPACING_SM]),
    ]
    .align_y(Alignment::Center);

    container(content)
        .style(crate::theme::container_error)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .into()
}

/// Blocking message shown when the HTTP client could not be created.
fn view_no_client<'a>() -> Element<'a, Message> {
    container(
        text("Networking could not be initialized. Restart the application.").color(GRAY_500),
    )
    .width(Length::Fill)
    .padding(SPACING_LG)
    .into()
}
