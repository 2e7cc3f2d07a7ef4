//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use crate::models::Node;

/// Newtype wrapper for displaying a compact node listing.
///
/// Unlike the full [`Node`] display, each node is a single line with its id,
/// title, category and dependencies, which suits catalog overviews.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::{catalog::baseline_nodes, display::NodeList};
///
/// let output = NodeList(baseline_nodes()).to_string();
/// assert!(output.contains("`system-architecture`"));
/// assert!(output.contains("after: system-architecture"));
/// ```
pub struct NodeList(pub Vec<Node>);

impl NodeList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No nodes.");
        }

        for node in &self.0 {
            write!(
                f,
                "- `{}`: {} ({}, {})",
                node.id, node.title, node.category, node.priority
            )?;
            if node.has_dependencies() {
                write!(f, ", after: {}", node.dependencies.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rendered prompts for one node, ready to copy.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::display::RenderedPrompts;
///
/// let prompts = RenderedPrompts::new("ui-design", vec!["Design a recipe app".to_string()]);
/// let output = prompts.to_string();
/// assert!(output.contains("# Prompts for `ui-design`"));
/// assert!(output.contains("1. Design a recipe app"));
/// ```
pub struct RenderedPrompts {
    pub node_id: String,
    pub prompts: Vec<String>,
}

impl RenderedPrompts {
    pub fn new(node_id: impl Into<String>, prompts: Vec<String>) -> Self {
        Self {
            node_id: node_id.into(),
            prompts,
        }
    }
}

impl fmt::Display for RenderedPrompts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Prompts for `{}`", self.node_id)?;
        writeln!(f)?;

        if self.prompts.is_empty() {
            return writeln!(f, "No prompts for this node.");
        }

        for (position, prompt) in self.prompts.iter().enumerate() {
            writeln!(f, "{}. {prompt}", position + 1)?;
        }
        Ok(())
    }
}
