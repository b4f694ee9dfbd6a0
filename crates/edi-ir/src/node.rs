//! Node types for the Intermediate Representation

use serde::{Deserialize, Serialize};

/// A node in the IR tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node name (emitted as the element name, e.g. `ARTICLE_LINE`)
    pub name: String,

    /// Node type
    pub node_type: NodeType,

    /// Node value (if applicable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Types of nodes in the IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// Root of the document
    Root,

    /// Ordered collection of records (e.g. `ARTICLE_LINES`)
    Collection,

    /// Record with named fields (e.g. a schedule or a single line)
    Record,

    /// Scalar field carrying a text value
    Field,
}

/// Values that can be stored in nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value
    String(String),

    /// Date/time value, already formatted for output
    DateTime(String),

    /// Null/empty value
    Null,
}

impl Node {
    /// Create a new node
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a node with a value
    pub fn with_value(name: impl Into<String>, node_type: NodeType, value: Value) -> Self {
        Self {
            name: name.into(),
            node_type,
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Create a text field node
    pub fn field(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_value(name, NodeType::Field, Value::String(text.into()))
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Add a text field child
    pub fn add_field(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.add_child(Node::field(name, text))
    }

    /// Add a text field child only when a value is present
    pub fn add_optional_field(&mut self, name: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.add_field(name, text);
        }
        self
    }

    /// Find a child by name
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find all children by name
    pub fn find_children(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Text of the named child, if it exists and carries a textual value
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.find_child(name)?.text()
    }

    /// Text of this node's value
    pub fn text(&self) -> Option<String> {
        self.value.as_ref().and_then(Value::as_string)
    }

    /// Whether this node has neither a value nor children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.as_ref().is_none_or(Value::is_null)
    }
}

impl Value {
    /// Convert value to string
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) | Value::DateTime(s) => Some(s.clone()),
            Value::Null => None,
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
