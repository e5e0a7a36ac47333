// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached with `OnceLock`. All sources use `currentColor` so a tint can be
//! applied through the widget style where needed.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `remove_image`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(pencil, "pencil.svg", "Pencil, used for edit affordances.");
define_icon!(trash, "trash.svg", "Trash can, used for remove affordances.");
define_icon!(cross, "cross.svg", "Cross, used for close/dismiss buttons.");
define_icon!(
    chevron_left,
    "chevron-left.svg",
    "Left chevron, used for the collapse affordance."
);
define_icon!(cog, "cog.svg", "Cog, used for the General settings tab.");
define_icon!(
    info_circle,
    "info-circle.svg",
    "Circled i, used for the Info tab and info toasts."
);
define_icon!(
    alert_circle,
    "alert-circle.svg",
    "Circled exclamation mark, used for warning and error toasts."
);
define_icon!(
    check_circle,
    "check-circle.svg",
    "Circled check mark, used for success toasts."
);

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color, independent of the theme.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}
