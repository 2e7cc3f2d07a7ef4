//! Synthesis operations for the Synthesizer.

use log::debug;

use super::{assembler, Synthesizer};
use crate::{
    catalog,
    error::{Result, SynthesisError},
    models::{FeatureTags, Plan},
    params::{ClassifyIdea, NodePrompts, SynthesizeIdea},
    stack,
};

impl Synthesizer {
    /// Runs the full pipeline and returns a new plan.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::InvalidInput` if `idea_text` is empty or
    /// whitespace-only, and `SynthesisError::Integrity` if the generated node
    /// graph is malformed. No partial plan is produced in either case.
    pub fn synthesize(&self, idea_text: &str, description: Option<&str>) -> Result<Plan> {
        let idea = validate_idea(idea_text)?;

        let tags = self.classifier.classify(idea);
        debug!("classified '{}' as {:?}", idea, tags.active());

        let nodes = catalog::build_nodes(&tags)?;
        let tech_stack = stack::infer_tech_stack(&tags);
        let phases = self.scheduler.schedule(&nodes)?;

        Ok(assembler::assemble(
            assembler::PlanParts {
                idea,
                description,
                tags,
                nodes,
                tech_stack,
                phases,
            },
            &self.config,
        ))
    }

    /// Classifies idea text without building a plan.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::InvalidInput` if `idea_text` is empty or
    /// whitespace-only.
    pub fn classify(&self, idea_text: &str) -> Result<FeatureTags> {
        let idea = validate_idea(idea_text)?;
        Ok(self.classifier.classify(idea))
    }

    /// Renders the prompts of one node of the plan for `idea_text`, with the
    /// idea substituted for every `{idea}` placeholder.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::InvalidInput` if the idea is empty or the
    /// plan for this idea has no node with the given id.
    pub fn node_prompts(&self, idea_text: &str, node_id: &str) -> Result<Vec<String>> {
        let plan = self.synthesize(idea_text, None)?;
        let node = plan.node(node_id).ok_or_else(|| {
            SynthesisError::invalid_input("node_id")
                .with_reason(format!("no node '{node_id}' in the plan for this idea"))
        })?;
        Ok(node.render_prompts(&plan.idea_text))
    }

    /// [`Synthesizer::synthesize`] driven by interface parameters.
    ///
    /// # Errors
    ///
    /// Same as [`Synthesizer::synthesize`].
    pub fn synthesize_params(&self, params: &SynthesizeIdea) -> Result<Plan> {
        self.synthesize(&params.idea, params.description.as_deref())
    }

    /// [`Synthesizer::classify`] driven by interface parameters.
    ///
    /// # Errors
    ///
    /// Same as [`Synthesizer::classify`].
    pub fn classify_params(&self, params: &ClassifyIdea) -> Result<FeatureTags> {
        self.classify(&params.idea)
    }

    /// [`Synthesizer::node_prompts`] driven by interface parameters.
    ///
    /// # Errors
    ///
    /// Same as [`Synthesizer::node_prompts`].
    pub fn node_prompts_params(&self, params: &NodePrompts) -> Result<Vec<String>> {
        self.node_prompts(&params.idea, &params.node_id)
    }
}

/// Trimmed idea text, rejecting blank input.
fn validate_idea(idea_text: &str) -> Result<&str> {
    let idea = idea_text.trim();
    if idea.is_empty() {
        return Err(SynthesisError::invalid_input("idea_text")
            .with_reason("must not be empty or whitespace-only"));
    }
    Ok(idea)
}
