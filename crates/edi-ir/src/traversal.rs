//! Cursor API for navigating the IR tree by path

use crate::node::Node;
use crate::Error;
use crate::Result;

/// A cursor for navigating the IR tree
pub struct Cursor<'a> {
    /// Current node
    node: &'a Node,

    /// Path to current node (for error reporting)
    path: Vec<String>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the given node
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            path: vec![node.name.clone()],
        }
    }

    /// Get the current node
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Get the current path
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Navigate to a child node by name
    pub fn child(&self, name: &str) -> Result<Cursor<'a>> {
        let child = self
            .node
            .find_child(name)
            .ok_or_else(|| Error::node_not_found(format!("{}/{}", self.path.join("/"), name)))?;

        let mut path = self.path.clone();
        path.push(name.to_string());
        Ok(Cursor { node: child, path })
    }

    /// Number of children with the given name
    pub fn count(&self, name: &str) -> usize {
        self.node.children.iter().filter(|c| c.name == name).count()
    }

    /// Navigate using a path (e.g., "SCHEDULE/ARTICLE_LINES/ARTICLE_LINE[1]/EAN_CODE")
    pub fn navigate(&self, path: &str) -> Result<Cursor<'a>> {
        let mut current_node = self.node;
        let mut current_path = self.path.clone();

        for segment in path.split('/') {
            if segment.is_empty() {
                continue;
            }

            // Handle array indexing like "ARTICLE_LINE[0]"
            if let Some(open_bracket) = segment.find('[') {
                let name = &segment[..open_bracket];
                let close_bracket = segment
                    .find(']')
                    .ok_or_else(|| Error::invalid_path(segment, "unclosed bracket"))?;
                let index: usize = segment[open_bracket + 1..close_bracket]
                    .parse()
                    .map_err(|_| Error::invalid_path(segment, "index is not a number"))?;

                current_node = current_node
                    .children
                    .iter()
                    .filter(|c| c.name == name)
                    .nth(index)
                    .ok_or_else(|| {
                        Error::node_not_found(format!("{}/{}", current_path.join("/"), segment))
                    })?;
                current_path.push(format!("{name}[{index}]"));
            } else {
                current_node = current_node.find_child(segment).ok_or_else(|| {
                    Error::node_not_found(format!("{}/{}", current_path.join("/"), segment))
                })?;
                current_path.push(segment.to_string());
            }
        }

        Ok(Cursor {
            node: current_node,
            path: current_path,
        })
    }

    /// Text value of the node at `path`, relative to this cursor
    pub fn text_at(&self, path: &str) -> Result<String> {
        let target = self.navigate(path)?;
        target.node.text().ok_or_else(|| Error::TypeMismatch {
            expected: "text value".to_string(),
            found: format!("{:?} at {}", target.node.node_type, target.path.join("/")),
        })
    }
}
