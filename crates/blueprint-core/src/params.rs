//! Parameter structures for Blueprint operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives or
//! dependencies. Interface layers wrap or convert into these types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is only compiled in with the `schema` feature,
//! which the MCP server enables.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for synthesizing a plan from an idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SynthesizeIdea {
    /// Free-text description of the app idea
    pub idea: String,
    /// Optional longer description copied into the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for classifying an idea into feature tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ClassifyIdea {
    /// Free-text description of the app idea
    pub idea: String,
}

/// Parameters for rendering the prompts of one plan node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NodePrompts {
    /// Free-text description of the app idea, substituted into the prompts
    pub idea: String,
    /// Id of the node, e.g. "api-development"
    pub node_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_idea_description_optional() {
        let params: SynthesizeIdea = serde_json::from_str(r#"{"idea": "A todo app"}"#).unwrap();
        assert_eq!(params.idea, "A todo app");
        assert!(params.description.is_none());
    }

    #[test]
    fn test_node_prompts_requires_node_id() {
        let result: Result<NodePrompts, _> = serde_json::from_str(r#"{"idea": "A todo app"}"#);
        assert!(result.is_err());
    }
}
