// SPDX-License-Identifier: MPL-2.0
//! Picture loading and orientation handling for the upload preview.

pub mod orientation;
pub mod picture;

pub use orientation::{Orientation, QuarterRotation, Transform};
pub use picture::{load_preview, PicturePreview};
