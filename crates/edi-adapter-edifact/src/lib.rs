//! # edi-adapter-edifact
//!
//! EDIFACT segment splitting and field normalization.
//!
//! This crate turns raw EDIFACT text into an ordered list of segments and
//! provides the total (never failing) helpers converters use to pull
//! values out of them.

pub mod normalize;
pub mod reader;
pub mod splitter;
pub mod syntax;

pub use normalize::{format_date, sanitize, split_component};
pub use reader::{decode_message, read_message};
pub use splitter::{Segment, split_segments};
pub use syntax::Separators;

use thiserror::Error;

/// Errors that can occur when reading EDIFACT input
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error reading '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Separator error: {0}")]
    Separator(String),
}

impl Error {
    /// Create an I/O error with the offending path
    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
