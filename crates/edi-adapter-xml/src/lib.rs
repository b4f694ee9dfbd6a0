//! # edi-adapter-xml
//!
//! Serializes IR documents as XML.
//!
//! Nodes become elements named after the node, text values become element
//! text and nodes without value or children are written self-closing.

pub mod config;
pub mod writer;

pub use config::{XmlConfig, XmlEncoding};
pub use writer::XmlWriter;

use thiserror::Error;

/// Errors that can occur when writing XML
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Unsupported encoding '{0}'")]
    UnsupportedEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
