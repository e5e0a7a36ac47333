// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the settings UI.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action button (save, confirm).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_200,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Quiet text-like button (cancel, edit links, remove image).
pub fn button_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Sidebar tab button; `selected` highlights the active tab.
pub fn button_tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if selected {
            Some(Background::Color(palette::PRIMARY_100))
        } else if status == button::Status::Hovered {
            Some(Background::Color(palette::GRAY_100))
        } else {
            None
        };
        button::Style {
            background,
            text_color: if selected {
                palette::PRIMARY_700
            } else {
                palette::GRAY_700
            },
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Semi-transparent backdrop behind the modal card; `alpha` is animated
/// during the exit transition.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha * opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Elevated modal card surface.
pub fn modal_card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Sidebar column of the settings modal.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Round container behind the initials fallback of the picture widget.
pub fn initials_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Bordered frame around the picture preview area.
pub fn picture_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// Toast container with a severity-colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..container::Style::default()
        }
    }
}
