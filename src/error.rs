#![warn(missing_docs)]
//! Ray source specific error structures
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Errors that can be returned while generating beams.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceError {
    /// two coordinate lists of an explicit coordinate beam have different lengths
    ShapeMismatch(String),
    /// a grid, ring or ray count is not usable (e.g. zero)
    InvalidSampleCount(String),
    /// an extent, radius, angle, wavelength or placement parameter is out of range
    InvalidParameter(String),
    /// errors while reading or parsing a beam document
    Document(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch(m) => {
                write!(f, "ShapeMismatch:{m}")
            }
            Self::InvalidSampleCount(m) => {
                write!(f, "InvalidSampleCount:{m}")
            }
            Self::InvalidParameter(m) => {
                write!(f, "InvalidParameter:{m}")
            }
            Self::Document(m) => {
                write!(f, "Document:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "RaySource Error:Other:{m}"),
        }
    }
}
impl Error for SourceError {}

impl std::convert::From<String> for SourceError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
