// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization
//! system. It handles language detection, translation file loading, and string
//! formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Dynamic loading of `.ftl` translation files
//! - Fallback to a caller-supplied default when a message is missing

pub mod fluent;

/// A message id paired with the English default used when the id is missing
/// from the active bundle. Section titles and descriptions are declared this
/// way so callers never end up with a bare `MISSING:` marker on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub id: &'static str,
    pub default: &'static str,
}

impl MessageRef {
    pub const fn new(id: &'static str, default: &'static str) -> Self {
        Self { id, default }
    }
}
