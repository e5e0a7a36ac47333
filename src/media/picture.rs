// SPDX-License-Identifier: MPL-2.0
//! Asynchronous preview generation for a locally selected picture.
//!
//! The pipeline reads the raw file, extracts its EXIF orientation, decodes the
//! pixels, pre-applies any mirroring, and hands back an Iced image handle plus
//! the transform descriptor. The quarter-turn part of the correction is left
//! to the widget, which applies it at render time.

use crate::error::ImageError;
use crate::media::orientation::{Orientation, Transform};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// A decoded, display-ready preview of a pending picture file.
#[derive(Debug, Clone)]
pub struct PicturePreview {
    pub handle: image::Handle,
    /// Pixel dimensions after mirroring (mirrors never swap axes).
    pub width: u32,
    pub height: u32,
    /// Full correction derived from the EXIF orientation tag. Mirrors are
    /// already baked into `handle`; `transform.rotate` still applies.
    pub transform: Transform,
}

/// Reads and decodes `path` into a [`PicturePreview`].
///
/// Fails with `ReadFailed` when the file cannot be read and `InvalidData`
/// when the bytes do not decode as an image; callers keep their previous
/// preview in both cases.
pub async fn load_preview(path: PathBuf) -> Result<PicturePreview, ImageError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| ImageError::ReadFailed(err.to_string()))?;
    decode_preview(&bytes)
}

/// Decoding half of [`load_preview`], synchronous and testable without a file.
pub fn decode_preview(bytes: &[u8]) -> Result<PicturePreview, ImageError> {
    let transform = Orientation::from_bytes(bytes).transform();

    let mut decoded = image_rs::load_from_memory(bytes)
        .map_err(|err| ImageError::InvalidData(err.to_string()))?;
    if transform.mirror_horizontal {
        decoded = decoded.fliph();
    }
    if transform.mirror_vertical {
        decoded = decoded.flipv();
    }

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PicturePreview {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
        transform,
    })
}

/// Extension of `path`, lowercased, for allow-list checks.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
