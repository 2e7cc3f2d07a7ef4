//! Node model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Category, Complexity, Priority};

/// Placeholder substituted with the idea text when prompts are rendered.
pub const IDEA_PLACEHOLDER: &str = "{idea}";

/// One unit of development work within a synthesized plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Stable identifier, unique within a plan
    pub id: String,

    /// Brief title of the work
    pub title: String,

    /// What the work involves
    pub description: String,

    pub category: Category,

    pub priority: Priority,

    /// Free-text duration range, e.g. "1-2 weeks"
    pub estimated_time: String,

    pub complexity: Complexity,

    /// Ids of nodes that must be done first, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Suggested tools for the work
    #[serde(default)]
    pub tools: Vec<String>,

    /// Assistant prompt templates containing an `{idea}` placeholder
    #[serde(default)]
    pub prompts: Vec<String>,

    /// Reference URLs
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Node {
    /// Render every prompt template with the literal idea text substituted
    /// for the `{idea}` placeholder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blueprint_core::catalog::baseline_nodes;
    ///
    /// let node = &baseline_nodes()[0];
    /// let prompts = node.render_prompts("a recipe sharing site");
    /// assert!(prompts.iter().all(|p| !p.contains("{idea}")));
    /// assert!(prompts.iter().any(|p| p.contains("a recipe sharing site")));
    /// ```
    pub fn render_prompts(&self, idea: &str) -> Vec<String> {
        self.prompts
            .iter()
            .map(|template| template.replace(IDEA_PLACEHOLDER, idea))
            .collect()
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
