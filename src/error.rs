// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
}

/// Specific error types for picture selection and preview generation.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// File extension is not in the configured allow-list
    UnsupportedType(String),

    /// The file could not be read from disk
    ReadFailed(String),

    /// The file was read but its contents could not be decoded
    InvalidData(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedType(_) => "error-image-unsupported-type",
            ImageError::ReadFailed(_) => "error-image-read-failed",
            ImageError::InvalidData(_) => "error-image-invalid",
        }
    }

    /// Arguments for message interpolation, if the key takes any.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ImageError::UnsupportedType(extension) => vec![("extension", extension.clone())],
            ImageError::ReadFailed(_) | ImageError::InvalidData(_) => Vec::new(),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedType(ext) => write!(f, "Unsupported image type: {}", ext),
            ImageError::ReadFailed(msg) => write!(f, "Failed to read image: {}", msg),
            ImageError::InvalidData(msg) => write!(f, "Invalid image data: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
