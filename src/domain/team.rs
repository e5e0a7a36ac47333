// SPDX-License-Identifier: MPL-2.0
//! In-memory team context consumed by the settings views.
//!
//! All team data arrives pre-loaded; nothing here is persisted or fetched
//! from a server.

use iced::widget::image;

/// The team whose settings are being edited.
#[derive(Debug, Clone, Default)]
pub struct Team {
    /// URL-safe handle for the team.
    pub name: String,
    /// Human-readable name, shown in headings and used for the initials
    /// fallback of the picture widget.
    pub display_name: String,
    /// Free-form description.
    pub description: String,
    /// Already-loaded team icon, if one has been set.
    pub icon: Option<image::Handle>,
}

impl Team {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            icon: None,
        }
    }
}
