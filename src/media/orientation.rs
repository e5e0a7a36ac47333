// SPDX-License-Identifier: MPL-2.0
//! EXIF orientation extraction and the fixed orientation-to-transform table.
//!
//! Cameras store pixel data in sensor order and record how the image must be
//! rotated and/or mirrored for correct display in the EXIF `Orientation` tag.
//! [`Orientation::from_bytes`] pulls that tag out of a raw file and
//! [`Orientation::transform`] maps each of the 8 defined codes to a display
//! correction. Unknown or missing codes map to the identity transform.

use std::io::{BufReader, Cursor};

/// The eight orientation codes defined by the EXIF specification, named after
/// where the stored image's (0, 0) pixel belongs on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 1 — stored upright, no correction needed.
    #[default]
    TopLeft,
    /// 2 — mirrored along the vertical axis.
    TopRight,
    /// 3 — upside down.
    BottomRight,
    /// 4 — mirrored along the horizontal axis.
    BottomLeft,
    /// 5 — mirrored and rotated; corrected by a 90° turn plus a horizontal mirror.
    LeftTop,
    /// 6 — rotated; corrected by a 90° clockwise turn.
    RightTop,
    /// 7 — mirrored and rotated; corrected by a 270° turn plus a horizontal mirror.
    RightBottom,
    /// 8 — rotated; corrected by a 270° clockwise turn.
    LeftBottom,
}

/// Quarter-turn rotation applied at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuarterRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl QuarterRotation {
    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> f32 {
        match self {
            QuarterRotation::Deg0 => 0.0,
            QuarterRotation::Deg90 => 90.0,
            QuarterRotation::Deg180 => 180.0,
            QuarterRotation::Deg270 => 270.0,
        }
    }
}

/// Display correction for a stored image: a quarter-turn rotation plus
/// optional mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    pub rotate: QuarterRotation,
    pub mirror_horizontal: bool,
    pub mirror_vertical: bool,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotate: QuarterRotation::Deg0,
        mirror_horizontal: false,
        mirror_vertical: false,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Orientation {
    /// Maps a raw EXIF orientation value to a variant. Values outside 1..=8
    /// (including 0, which some writers emit) fall back to `TopLeft`.
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => Orientation::TopRight,
            3 => Orientation::BottomRight,
            4 => Orientation::BottomLeft,
            5 => Orientation::LeftTop,
            6 => Orientation::RightTop,
            7 => Orientation::RightBottom,
            8 => Orientation::LeftBottom,
            _ => Orientation::TopLeft,
        }
    }

    /// Reads the orientation tag from a raw image file. Files without EXIF
    /// data (PNG, BMP, stripped JPEG) yield `TopLeft`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut reader = BufReader::new(Cursor::new(bytes));
        let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
            return Orientation::TopLeft;
        };
        exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from_code)
            .unwrap_or_default()
    }

    /// The fixed lookup table from orientation code to display correction.
    pub fn transform(self) -> Transform {
        match self {
            Orientation::TopLeft => Transform::IDENTITY,
            Orientation::TopRight => Transform {
                mirror_horizontal: true,
                ..Transform::IDENTITY
            },
            Orientation::BottomRight => Transform {
                rotate: QuarterRotation::Deg180,
                ..Transform::IDENTITY
            },
            Orientation::BottomLeft => Transform {
                mirror_vertical: true,
                ..Transform::IDENTITY
            },
            Orientation::LeftTop => Transform {
                rotate: QuarterRotation::Deg90,
                mirror_horizontal: true,
                mirror_vertical: false,
            },
            Orientation::RightTop => Transform {
                rotate: QuarterRotation::Deg90,
                ..Transform::IDENTITY
            },
            Orientation::RightBottom => Transform {
                rotate: QuarterRotation::Deg270,
                mirror_horizontal: true,
                mirror_vertical: false,
            },
            Orientation::LeftBottom => Transform {
                rotate: QuarterRotation::Deg270,
                ..Transform::IDENTITY
            },
        }
    }
}
