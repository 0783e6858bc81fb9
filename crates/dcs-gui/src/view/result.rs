//! Result stage view: download variants and reset.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use dcs_model::Variant;

use crate::message::{Message, ResultMessage};
use crate::state::AppState;
use crate::theme::{self, GRAY_500, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL};

/// Render the Result stage.
pub fn view_result(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;

    let filename = session
        .file()
        .map(|f| f.original_filename.as_str())
        .unwrap_or("(unknown file)");

    let mut summary = column![
        text("Cleaning finished").size(22),
        text(format!("Source file: {filename}")).size(14).color(GRAY_500),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    if let Some(rows) = session.cleaned_rows() {
        summary = summary.push(
            text(format!("{rows} row(s) in the cleaned output"))
                .size(12)
                .color(GRAY_500),
        );
    }

    let downloads = column![
        button(text("Download semicolon CSV"))
            .on_press(Message::Result(ResultMessage::Download(Variant::Semicolon)))
            .style(theme::button_primary)
            .width(Length::Fill)
            .padding(SPACING_MD),
        button(text("Download comma CSV"))
            .on_press(Message::Result(ResultMessage::Download(Variant::Comma)))
            .style(theme::button_accent)
            .width(Length::Fill)
            .padding(SPACING_MD),
        text("Both links open in your browser and contain the same data, differing only in delimiter.")
            .size(12)
            .color(GRAY_500),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    let content = column![
        summary,
        Space::new().height(SPACING_LG),
        downloads,
        Space::new().height(SPACING_LG),
        button(text("Upload another file"))
            .on_press(Message::Reset)
            .style(theme::button_secondary)
            .padding([SPACING_SM, SPACING_LG]),
    ]
    .align_x(Alignment::Center);

    container(content)
        .style(theme::container_card)
        .width(Length::Fill)
        .padding(SPACING_XL)
        .into()
}
