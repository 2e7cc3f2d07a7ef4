//! Node catalog and conditional node injection.
//!
//! The catalog is a fixed table of [`NodeTemplate`]s authored as a DAG: every
//! baseline template only depends on templates authored before it, and every
//! conditional template only depends on baseline templates. Instantiating the
//! catalog for a set of [`FeatureTags`] yields the node list for one plan.
//!
//! ```text
//! system-architecture ─┬─ database-schema ── api-development ─┬─ business-logic ─┐
//!                      │                                      └─ security-hardening ─┐
//!                      └─ ui-design ── component-library ──────── testing-strategy ──┴─ deployment-pipeline
//! ```
//!
//! Conditional nodes: `ai-integration` (after `api-development`) when the idea
//! is tagged AI, and `mobile-development` (after `ui-design`) when it is
//! tagged mobile.

use std::collections::HashSet;

use log::debug;

use crate::{
    error::{Result, SynthesisError},
    models::{Category, Complexity, FeatureTags, Node, Priority},
};

mod baseline;
mod conditional;

/// Stable node ids.
pub mod ids {
    pub const SYSTEM_ARCHITECTURE: &str = "system-architecture";
    pub const DATABASE_SCHEMA: &str = "database-schema";
    pub const UI_DESIGN: &str = "ui-design";
    pub const COMPONENT_LIBRARY: &str = "component-library";
    pub const API_DEVELOPMENT: &str = "api-development";
    pub const BUSINESS_LOGIC: &str = "business-logic";
    pub const SECURITY_HARDENING: &str = "security-hardening";
    pub const TESTING_STRATEGY: &str = "testing-strategy";
    pub const DEPLOYMENT_PIPELINE: &str = "deployment-pipeline";
    pub const AI_INTEGRATION: &str = "ai-integration";
    pub const MOBILE_DEVELOPMENT: &str = "mobile-development";
}

/// Static, borrow-only form of a [`Node`] as authored in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct NodeTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub estimated_time: &'static str,
    pub complexity: Complexity,
    pub dependencies: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub prompts: &'static [&'static str],
    pub resources: &'static [&'static str],
}

impl NodeTemplate {
    /// Create an owned node for a plan.
    pub fn instantiate(&self) -> Node {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }

        Node {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            priority: self.priority,
            estimated_time: self.estimated_time.to_string(),
            complexity: self.complexity,
            dependencies: owned(self.dependencies),
            tools: owned(self.tools),
            prompts: owned(self.prompts),
            resources: owned(self.resources),
        }
    }
}

/// Baseline templates in authoring order.
pub fn baseline_templates() -> &'static [NodeTemplate] {
    &baseline::BASELINE
}

/// Instantiated baseline nodes, present in every plan.
pub fn baseline_nodes() -> Vec<Node> {
    baseline::BASELINE
        .iter()
        .map(NodeTemplate::instantiate)
        .collect()
}

/// Conditional nodes enabled by the given tags, in injection order.
pub fn conditional_nodes(tags: &FeatureTags) -> Vec<Node> {
    conditional::CONDITIONAL
        .iter()
        .filter(|(tag, _)| tags.get(*tag))
        .map(|(tag, template)| {
            debug!("injecting '{}' for tag '{}'", template.id, tag.as_str());
            template.instantiate()
        })
        .collect()
}

/// Full node list for a plan: the baseline followed by injected nodes.
///
/// # Errors
///
/// Returns `SynthesisError::Integrity` if the resulting set contains a
/// duplicate id or a dependency that does not resolve.
pub fn build_nodes(tags: &FeatureTags) -> Result<Vec<Node>> {
    let mut nodes = baseline_nodes();
    nodes.extend(conditional_nodes(tags));
    verify_integrity(&nodes)?;
    Ok(nodes)
}

/// Check that ids are unique and every dependency resolves within `nodes`.
///
/// # Errors
///
/// Returns `SynthesisError::Integrity` naming the first offending node.
pub fn verify_integrity(nodes: &[Node]) -> Result<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(SynthesisError::integrity(&node.id, &node.id)
                .with_reason("node id appears more than once"));
        }
    }

    for node in nodes {
        if let Some(missing) = node
            .dependencies
            .iter()
            .find(|dep| !seen.contains(dep.as_str()))
        {
            return Err(SynthesisError::integrity(&node.id, missing)
                .with_reason("dependency does not resolve within the generated node set"));
        }
    }

    Ok(())
}
