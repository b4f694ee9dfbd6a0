//! Document representation for the Intermediate Representation
#![allow(clippy::must_use_candidate)] // Builder/constructor API intentionally omits pervasive #[must_use].
#![allow(clippy::return_self_not_must_use)] // Fluent builder methods return Self for ergonomics.

use crate::node::Node;
use crate::traversal::Cursor;
use serde::{Deserialize, Serialize};

/// A document in the Intermediate Representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Root node of the document
    pub root: Node,

    /// Document-level metadata
    pub metadata: DocumentMetadata,
}

/// Metadata associated with a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Source file path or identifier
    pub source: Option<String>,

    /// Document type identifier (e.g. `DELFOR`)
    pub doc_type: Option<String>,

    /// Message reference numbers
    pub message_refs: Vec<String>,

    /// Creation timestamp
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Document {
    /// Create a new document with the given root node
    pub fn new(root: Node) -> Self {
        Self {
            root,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Create a new document with metadata
    pub fn with_metadata(root: Node, metadata: DocumentMetadata) -> Self {
        Self { root, metadata }
    }

    /// Record where the document was read from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    /// Stamp the creation time
    pub fn stamped(mut self, created_at: chrono::DateTime<chrono::Utc>) -> Self {
        self.metadata.created_at = Some(created_at);
        self
    }

    /// Cursor positioned at the root node
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.root)
    }
}
