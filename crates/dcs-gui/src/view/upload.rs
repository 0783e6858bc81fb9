//! Upload stage view: file picker plus the recent-uploads shortcut list.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use dcs_api::RecentUpload;

use crate::message::{Message, UploadMessage};
use crate::state::AppState;
use crate::theme::{
    self, GRAY_400, GRAY_500, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};

/// Render the Upload stage.
pub fn view_upload(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;
    let busy = session.is_loading();

    // Chosen file name comes from session state, never from widget state.
    let picked_label: String = session
        .picked_file()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "No file chosen".to_string());

    let drop_area = container(
        column![
            text("Upload a file").size(22),
            Space::new().height(SPACING_SM),
            text(picked_label).size(15),
            Space::new().height(SPACING_MD),
            button(text("Choose file..."))
                .on_press_maybe((!busy).then_some(Message::Upload(UploadMessage::PickFile)))
                .style(theme::button_secondary)
                .padding([SPACING_SM, SPACING_MD]),
            Space::new().height(SPACING_SM),
            text("Supported file types: .xls, .xlsx, .csv")
                .size(12)
                .color(GRAY_400),
        ]
        .align_x(Alignment::Center),
    )
    .style(theme::container_panel)
    .width(Length::Fill)
    .padding(SPACING_XL);

    let submit_label = if busy { "Uploading..." } else { "Upload & Analyze" };
    let submit = button(text(submit_label))
        .on_press_maybe((!busy).then_some(Message::Upload(UploadMessage::Submit)))
        .style(theme::button_primary)
        .width(Length::Fill)
        .padding(SPACING_MD);

    let mut page = column![drop_area, submit].spacing(SPACING_LG);

    if !state.recent.is_empty() {
        page = page.push(view_recent_list(&state.recent, busy));
    }

    page.into()
}

/// Previously uploaded files; analyzing one skips the upload call.
fn view_recent_list(entries: &[RecentUpload], busy: bool) -> Element<'_, Message> {
    let mut list = column![
        text("Previously uploaded").size(16),
        text("Pick a file that is already on the server to analyze it again.")
            .size(12)
            .color(GRAY_500),
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS);

    for entry in entries {
        let uploaded = entry.uploaded_at.format("%Y-%m-%d %H:%M");
        let line = row![
            text(&entry.original_filename).size(14),
            Space::new().width(SPACING_SM),
            text(format!("uploaded {uploaded}")).size(12).color(GRAY_500),
            Space::new().width(Length::Fill),
            button(text("Analyze").size(12))
                .on_press_maybe(
                    (!busy).then_some(Message::Upload(UploadMessage::ExistingSelected(
                        entry.clone(),
                    ))),
                )
                .style(theme::button_secondary)
                .padding([SPACING_XS, SPACING_SM]),
        ]
        .align_y(Alignment::Center);

        list = list.push(line);
    }

    container(list)
        .style(theme::container_card)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .into()
}
