// SPDX-License-Identifier: MPL-2.0
//! `team_settings` is a desktop team settings dialog built with the Iced GUI
//! framework.
//!
//! It provides a tabbed modal for editing a team's name, description and
//! icon, with EXIF-aware picture previews, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/team-settings/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
