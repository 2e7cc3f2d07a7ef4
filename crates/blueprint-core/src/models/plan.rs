//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{FeatureTags, Node, Phase};

/// A complete synthesized development plan.
///
/// The plan exclusively owns its nodes and phases; each synthesis call
/// produces a new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// The idea text the plan was synthesized from
    pub idea_text: String,

    /// Caller-supplied description, or a generated one-liner
    pub description: String,

    /// Feature classification of the idea
    pub tags: FeatureTags,

    /// Every node in the plan, baseline first then injected nodes
    pub nodes: Vec<Node>,

    /// Recommended technologies, deduplicated, in priority order
    pub tech_stack: Vec<String>,

    pub timeline_estimate: String,

    pub budget_estimate: String,

    pub team_roles: Vec<String>,

    /// Delivery phases partitioning `nodes`
    pub phases: Vec<Phase>,
}

impl Plan {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Index of the phase containing the given node.
    pub fn phase_of(&self, node_id: &str) -> Option<usize> {
        self.phases
            .iter()
            .find(|phase| phase.contains(node_id))
            .map(|phase| phase.index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
