//! Final aggregation of pipeline outputs into a plan.

use crate::{
    config::SynthesisConfig,
    models::{FeatureTags, Node, Phase, Plan},
};

/// Pipeline outputs for one synthesis call.
pub struct PlanParts<'a> {
    /// Trimmed, non-empty idea text
    pub idea: &'a str,
    pub description: Option<&'a str>,
    pub tags: FeatureTags,
    pub nodes: Vec<Node>,
    pub tech_stack: Vec<String>,
    pub phases: Vec<Phase>,
}

/// One-line description used when the caller supplies none.
pub fn default_description(idea: &str) -> String {
    format!("A comprehensive development plan for: {idea}")
}

/// Combine pipeline outputs with the configured estimates.
pub fn assemble(parts: PlanParts<'_>, config: &SynthesisConfig) -> Plan {
    let description = parts
        .description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map_or_else(|| default_description(parts.idea), str::to_string);

    Plan {
        idea_text: parts.idea.to_string(),
        description,
        tags: parts.tags,
        nodes: parts.nodes,
        tech_stack: parts.tech_stack,
        timeline_estimate: config.timeline_estimate.clone(),
        budget_estimate: config.budget_estimate.clone(),
        team_roles: config.team_roles.clone(),
        phases: parts.phases,
    }
}
