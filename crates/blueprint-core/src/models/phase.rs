//! Phase model definition.

use serde::{Deserialize, Serialize};

use super::Node;

/// An ordered delivery stage holding the nodes scheduled into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Position of the phase in the delivery order (0-indexed)
    pub index: usize,

    /// Display name, e.g. "Foundation"
    pub name: String,

    /// Nodes in this phase, in plan node order
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Phase {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == node_id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }
}
