//! Preview stage view: detected columns, ordered selection, name gating.

use iced::widget::{Space, button, checkbox, column, container, row, rule, text};
use iced::{Alignment, Element, Length};

use dcs_api::Preview;
use dcs_model::{ColumnPair, IMAGE_NAME_TEMPLATE, Selection};
use dcs_session::Session;

use crate::message::{Message, PreviewMessage};
use crate::state::AppState;
use crate::theme::{
    self, GRAY_400, GRAY_500, PRIMARY, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};

/// Columns per row in the chip grid.
const CHIPS_PER_ROW: usize = 4;

/// Render the Preview stage.
pub fn view_preview(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;
    let Some(preview) = session.preview() else {
        // Preview stage is only entered with a loaded preview.
        return text("No preview loaded.").color(GRAY_500).into();
    };

    let header = view_file_header(session, preview);
    let table = view_column_table(preview);
    let chips = view_column_chips(preview, session.selection());
    let selected = view_selected_list(session);
    let gate = view_generate_names(session);
    let actions = view_actions(session);

    column![header, table, chips, selected, gate, actions]
        .spacing(SPACING_LG)
        .into()
}

/// File name and row count.
fn view_file_header<'a>(session: &'a Session, preview: &'a Preview) -> Element<'a, Message> {
    let filename = session
        .file()
        .map(|f| f.original_filename.as_str())
        .unwrap_or("(unknown file)");

    let mut subtitle = format!("{} column(s) detected", preview.columns.len());
    if let Some(rows) = preview.rows {
        subtitle.push_str(&format!(" · {rows} row(s)"));
    }

    column![
        text("Analysis result").size(22),
        text(filename).size(14).color(PRIMARY),
        text(subtitle).size(12).color(GRAY_500),
    ]
    .spacing(SPACING_XS)
    .into()
}

/// Detected columns with their normalized keys and the sample row.
fn view_column_table(preview: &Preview) -> Element<'_, Message> {
    let header = row![
        text("Column").size(12).color(GRAY_500).width(Length::Fill),
        text("Normalized").size(12).color(GRAY_500).width(Length::Fill),
        text("First row").size(12).color(GRAY_500).width(Length::Fill),
    ];

    let mut table = column![header, rule::horizontal(1)].spacing(SPACING_XS);

    for pair in preview.columns.pairs() {
        let sample = preview.sample_value(&pair.raw_label).unwrap_or_default();
        table = table.push(
            row![
                text(&pair.raw_label).size(13).width(Length::Fill),
                text(&pair.normalized_key)
                    .size(13)
                    .color(GRAY_500)
                    .width(Length::Fill),
                text(sample).size(13).color(GRAY_400).width(Length::Fill),
            ]
            .align_y(Alignment::Center),
        );
    }

    container(table)
        .style(theme::container_card)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .into()
}

/// Clickable chips for every detected column.
fn view_column_chips<'a>(preview: &'a Preview, selection: &'a Selection) -> Element<'a, Message> {
    let mut grid = column![].spacing(SPACING_SM);

    for chunk in preview.columns.pairs().chunks(CHIPS_PER_ROW) {
        let mut line = row![].spacing(SPACING_SM);
        for pair in chunk {
            line = line.push(view_chip(pair, selection.contains(&pair.normalized_key)));
        }
        grid = grid.push(line);
    }

    column![
        text("Detected columns").size(16),
        text("Click the columns your CSV needs; the rest will be cleaned away.")
            .size(12)
            .color(GRAY_500),
        Space::new().height(SPACING_XS),
        grid,
    ]
    .spacing(SPACING_XS)
    .into()
}

fn view_chip(pair: &ColumnPair, selected: bool) -> Element<'_, Message> {
    button(text(&pair.raw_label).size(13))
        .on_press(Message::Preview(PreviewMessage::ColumnToggled(
            pair.raw_label.clone(),
        )))
        .style(theme::button_chip(selected))
        .padding([SPACING_SM, SPACING_MD])
        .into()
}

/// The ordered selection with move/remove controls.
///
/// The up/down buttons are the thin adapter over the session's
/// `reorder(from, to)` operation.
fn view_selected_list(session: &Session) -> Element<'_, Message> {
    let selection = session.selection();
    if selection.is_empty() {
        return column![
            text("Columns to keep").size(16),
            text("Nothing selected yet. The cleaned file needs at least one column.")
                .size(12)
                .color(GRAY_500),
        ]
        .spacing(SPACING_XS)
        .into();
    }

    let len = selection.len();
    let mut list = column![].spacing(SPACING_XS);

    for (index, key) in selection.keys().iter().enumerate() {
        let label = session
            .columns()
            .and_then(|map| map.raw_for_key(key))
            .unwrap_or(key.as_str());

        let line = row![
            text(format!("{}.", index + 1)).size(13).color(GRAY_500),
            Space::new().width(SPACING_SM),
            text(label).size(14),
            Space::new().width(Length::Fill),
            button(text("Up").size(12))
                .on_press_maybe((index > 0).then_some(Message::Preview(
                    PreviewMessage::MoveUp(index)
                )))
                .style(theme::button_secondary)
                .padding([SPACING_XS, SPACING_SM]),
            Space::new().width(SPACING_XS),
            button(text("Down").size(12))
                .on_press_maybe((index + 1 < len).then_some(Message::Preview(
                    PreviewMessage::MoveDown(index)
                )))
                .style(theme::button_secondary)
                .padding([SPACING_XS, SPACING_SM]),
            Space::new().width(SPACING_XS),
            button(text("Remove").size(12))
                .on_press(Message::Preview(PreviewMessage::ColumnRemoved(key.clone())))
                .style(theme::button_secondary)
                .padding([SPACING_XS, SPACING_SM]),
        ]
        .align_y(Alignment::Center);

        list = list.push(line);
    }

    let panel = column![
        text("Columns to keep").size(16),
        text("This order becomes the column order of the cleaned file.")
            .size(12)
            .color(GRAY_500),
        Space::new().height(SPACING_XS),
        list,
    ]
    .spacing(SPACING_XS);

    container(panel)
        .style(theme::container_panel)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .into()
}

/// Generate-names checkbox with gate feedback.
fn view_generate_names(session: &Session) -> Element<'_, Message> {
    let gate_open = session.can_generate_names();

    let toggle = row![
        checkbox(session.generate_names())
            .on_toggle(|enabled| Message::Preview(PreviewMessage::GenerateNamesToggled(enabled))),
        Space::new().width(SPACING_SM),
        text("Create product image names").size(14),
    ]
    .align_y(Alignment::Center);

    let mut section = column![toggle].spacing(SPACING_XS);

    if gate_open {
        if session.generate_names() {
            section = section.push(
                text(format!("Names will follow the pattern {IMAGE_NAME_TEMPLATE}"))
                    .size(12)
                    .color(GRAY_500),
            );
        }
    } else {
        let missing = session.missing_columns().join(", ");
        section = section.push(
            container(
                text(format!("To generate names you also need: {missing}")).size(12),
            )
            .style(theme::container_error)
            .padding([SPACING_XS, SPACING_SM]),
        );
    }

    section.into()
}

/// Cancel and process actions.
fn view_actions(session: &Session) -> Element<'_, Message> {
    let busy = session.is_loading();
    let can_process = !busy && !session.selection().is_empty();
    let process_label = if busy { "Processing..." } else { "Process" };

    row![
        button(text("Cancel"))
            .on_press(Message::Reset)
            .style(theme::button_secondary)
            .width(Length::Fill)
            .padding(SPACING_MD),
        Space::new().width(SPACING_MD),
        button(text(process_label))
            .on_press_maybe(can_process.then_some(Message::Preview(PreviewMessage::Submit)))
            .style(theme::button_primary)
            .width(Length::Fill)
            .padding(SPACING_MD),
    ]
    .into()
}
