#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-ir
//!
//! Intermediate Representation structures and traversal APIs for EDI documents.
//!
//! Converters build a tree of named nodes with text values; emitters
//! (XML, JSON) serialize it without knowing the source message type.

/// Document container and top-level IR metadata accessors.
pub mod document;
/// Core tree node model.
pub mod node;
/// Cursor-based path navigation over IR trees.
pub mod traversal;

/// Primary IR document type.
pub use document::{Document, DocumentMetadata};
/// Node primitives for tree structure and value typing.
pub use node::{Node, NodeType, Value};
/// Path navigation entry point.
pub use traversal::Cursor;

use thiserror::Error;

/// Errors that can occur when working with the IR
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found at path: {path}")]
    NodeNotFound { path: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl Error {
    /// Build a node-not-found error with path context.
    pub fn node_not_found(path: impl Into<String>) -> Self {
        Self::NodeNotFound { path: path.into() }
    }

    /// Build an invalid-path error with input path and parsing reason.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Crate-local result type for IR operations.
pub type Result<T> = std::result::Result<T, Error>;
