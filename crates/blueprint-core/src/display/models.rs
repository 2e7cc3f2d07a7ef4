//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent section layout for nodes, whether standalone or inside a plan
//! - Empty-collection handling (no tags, empty phases)

use std::fmt;

use crate::models::{
    Category, Complexity, FeatureTag, FeatureTags, Node, Phase, Plan, Priority,
};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for FeatureTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active();
        if active.is_empty() {
            return write!(f, "none detected");
        }
        let labels: Vec<&str> = active.iter().map(FeatureTag::label).collect();
        write!(f, "{}", labels.join(", "))
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "#### {heading}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} `{}` ({})",
            self.title,
            self.id,
            self.priority.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Complexity: {}", self.complexity)?;
        writeln!(f, "- Estimate: {}", self.estimated_time)?;
        if self.has_dependencies() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        write_list(f, "Tools", &self.tools)?;
        write_list(f, "Prompts", &self.prompts)?;
        write_list(f, "Resources", &self.resources)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Phase {}: {}", self.index + 1, self.name)?;
        writeln!(f)?;

        if self.nodes.is_empty() {
            writeln!(f, "No nodes in this phase.")?;
            return writeln!(f);
        }

        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan: {}", self.idea_text)?;
        writeln!(f)?;

        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Features: {}", self.tags)?;
        writeln!(f, "- Nodes: {}", self.nodes.len())?;
        writeln!(f, "- Timeline: {}", self.timeline_estimate)?;
        writeln!(f, "- Budget: {}", self.budget_estimate)?;
        writeln!(f, "- Team: {}", self.team_roles.join(", "))?;
        writeln!(f)?;

        writeln!(f, "## Tech Stack")?;
        writeln!(f)?;
        for tech in &self.tech_stack {
            writeln!(f, "- {tech}")?;
        }
        writeln!(f)?;

        for phase in &self.phases {
            write!(f, "{phase}")?;
        }

        Ok(())
    }
}
