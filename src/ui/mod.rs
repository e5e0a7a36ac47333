// SPDX-License-Identifier: MPL-2.0
//! View layer: reusable widgets plus the team settings modal.
//!
//! Every component follows the same contract: it owns a `State`, consumes its
//! `Message`s, and reports anything the owner must act on through an `Event`
//! return value. Components never run side effects themselves.

pub mod design_tokens;
pub mod dialog;
pub mod icons;
pub mod notifications;
pub mod picture_upload;
pub mod section_item;
pub mod styles;
pub mod team_settings;
