//! Theme and styling for Data Cleaner Studio.
//!
//! One light palette, spacing constants, and the widget style functions the
//! views share. Style functions receive `&Theme` and read the extended
//! palette where possible; brand colors not covered by it live here as
//! constants.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, chip padding
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

/// Small radius - buttons, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 8.0;

// =============================================================================
// COLORS
// =============================================================================

/// Brand blue, used for primary actions and selected chips.
pub const PRIMARY: Color = Color {
    r: 0.0,
    g: 0.533,
    b: 1.0,
    a: 1.0,
};

/// Darker brand blue for pressed states and the alternate download action.
pub const PRIMARY_DARK: Color = Color {
    r: 0.0,
    g: 0.29,
    b: 0.776,
    a: 1.0,
};

/// Near-black body text.
pub const GRAY_900: Color = Color {
    r: 0.102,
    g: 0.102,
    b: 0.102,
    a: 1.0,
};

/// Secondary text.
pub const GRAY_500: Color = Color {
    r: 0.42,
    g: 0.447,
    b: 0.502,
    a: 1.0,
};

/// Hint text.
pub const GRAY_400: Color = Color {
    r: 0.612,
    g: 0.639,
    b: 0.686,
    a: 1.0,
};

/// Default border color.
pub const BORDER: Color = Color {
    r: 0.898,
    g: 0.906,
    b: 0.922,
    a: 1.0,
};

/// Faint blue surface tint for highlighted panels.
pub const SURFACE_TINT: Color = Color {
    r: 0.973,
    g: 0.988,
    b: 1.0,
    a: 1.0,
};

/// Light blue border for highlighted panels.
pub const BORDER_ACCENT: Color = Color {
    r: 0.631,
    g: 0.843,
    b: 1.0,
    a: 1.0,
};

/// Error banner background.
pub const DANGER_BG: Color = Color {
    r: 0.996,
    g: 0.886,
    b: 0.886,
    a: 1.0,
};

/// Error banner border.
pub const DANGER_BORDER: Color = Color {
    r: 0.988,
    g: 0.647,
    b: 0.647,
    a: 1.0,
};

/// Error banner text.
pub const DANGER_TEXT: Color = Color {
    r: 0.6,
    g: 0.106,
    b: 0.106,
    a: 1.0,
};

/// Success green.
pub const SUCCESS: Color = Color {
    r: 0.133,
    g: 0.773,
    b: 0.369,
    a: 1.0,
};

// =============================================================================
// THEME CREATION
// =============================================================================

/// The application theme.
pub fn app_theme() -> Theme {
    Theme::custom(
        "Data Cleaner Light".to_string(),
        Palette {
            background: Color::WHITE,
            text: GRAY_900,
            primary: PRIMARY,
            success: SUCCESS,
            warning: Color {
                r: 0.95,
                g: 0.65,
                b: 0.05,
                a: 1.0,
            },
            danger: Color {
                r: 0.863,
                g: 0.149,
                b: 0.149,
                a: 1.0,
            },
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: Color::WHITE,
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color { a: 0.15, ..GRAY_900 },
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: Color::WHITE,
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color { a: 0.25, ..GRAY_900 },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(PRIMARY_DARK.into()),
            text_color: Color::WHITE,
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(BORDER.into()),
            text_color: GRAY_500,
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_TINT,
        _ => Color::WHITE,
    };
    let text_color = match status {
        button::Status::Disabled => GRAY_400,
        _ => GRAY_900,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Dark-blue button for the alternate download variant.
pub fn button_accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => PRIMARY,
        _ => PRIMARY_DARK,
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Toggle chip for a detected column.
pub fn button_chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let border_color = if selected {
            PRIMARY
        } else if matches!(status, button::Status::Hovered) {
            BORDER_ACCENT
        } else {
            BORDER
        };

        button::Style {
            background: Some(if selected { SURFACE_TINT } else { Color::WHITE }.into()),
            text_color: if selected { PRIMARY } else { GRAY_900 },
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: if selected { 2.0 } else { 1.0 },
                color: border_color,
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Plain white card with a light border.
pub fn container_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: BORDER,
        },
        ..Default::default()
    }
}

/// Tinted panel used for the selection list and the drop area.
pub fn container_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE_TINT.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: BORDER_ACCENT,
        },
        ..Default::default()
    }
}

/// Error banner.
pub fn container_error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(DANGER_BG.into()),
        text_color: Some(DANGER_TEXT),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: DANGER_BORDER,
        },
        ..Default::default()
    }
}
