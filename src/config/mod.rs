// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Besides the display language, the configuration carries the allow-list of
//! static image extensions accepted by the picture upload widget and the
//! visibility policy for its remove button.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TeamSettings";

/// Visibility policy for the picture widget's remove button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoveButton {
    #[default]
    Always,
    WhenImagePresent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default = "default_image_extensions")]
    pub accepted_image_extensions: Vec<String>,
    #[serde(default)]
    pub remove_button: RemoveButton,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            accepted_image_extensions: default_image_extensions(),
            remove_button: RemoveButton::default(),
        }
    }
}

/// Static image formats the picture widget accepts, mirroring the formats the
/// preview decoder can handle.
fn default_image_extensions() -> Vec<String> {
    ["bmp", "gif", "jpeg", "jpg", "png", "tiff", "webp"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) => load_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
