// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Color(ColorError),
}

/// Specific error types for palette color overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not a CSS hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    InvalidHex(String),

    /// The override names a palette entry that does not exist.
    UnknownToken(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHex(value) => write!(f, "invalid hex color: {}", value),
            ColorError::UnknownToken(name) => write!(f, "unknown palette token: {}", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Color(e) => write!(f, "Color Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Error::Color(err)
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
