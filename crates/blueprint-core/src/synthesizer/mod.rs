//! High-level synthesis API.
//!
//! This module provides the [`Synthesizer`], which runs the full idea-to-plan
//! pipeline:
//!
//! ```text
//! idea text ──▶ classifier ──▶ tags ─┬─▶ catalog + injection ──▶ nodes ──▶ scheduler ──▶ phases ─┐
//!                                    └─▶ stack inference ───────────────────────────────────────┤
//!                                                                                                ▼
//!                                                                    assembler (+ config) ──▶ Plan
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Synthesizer`] instances with
//!   configuration and a classifier strategy
//! - [`pipeline`]: The synthesis operations themselves
//! - [`assembler`]: Final aggregation of pipeline outputs into a [`Plan`]
//!
//! A [`Synthesizer`] holds no mutable state. The same input always yields the
//! same [`Plan`], and one instance can be shared freely across threads.
//!
//! # Usage Examples
//!
//! ```rust
//! use blueprint_core::SynthesizerBuilder;
//!
//! # fn example() -> blueprint_core::Result<()> {
//! let synthesizer = SynthesizerBuilder::new().without_user_config().build()?;
//! let plan = synthesizer.synthesize("AI-powered mobile app for language learning", None)?;
//!
//! assert_eq!(plan.nodes.len(), 11);
//! assert!(plan.tags.is_ai);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`Plan`]: crate::models::Plan

use crate::{
    classifier::{IdeaClassifier, KeywordClassifier},
    config::SynthesisConfig,
    error::Result,
    models::Plan,
    scheduler::PhaseScheduler,
};

pub mod assembler;
pub mod builder;
pub mod pipeline;


pub use builder::SynthesizerBuilder;

/// Main interface for turning idea text into plans.
pub struct Synthesizer {
    pub(crate) classifier: Box<dyn IdeaClassifier>,
    pub(crate) scheduler: PhaseScheduler,
    pub(crate) config: SynthesisConfig,
}

impl Synthesizer {
    /// Creates a synthesizer from already validated parts.
    pub(crate) fn new(
        classifier: Box<dyn IdeaClassifier>,
        scheduler: PhaseScheduler,
        config: SynthesisConfig,
    ) -> Self {
        Self {
            classifier,
            scheduler,
            config,
        }
    }

    /// The configuration this synthesizer applies to every plan.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(
            Box::new(KeywordClassifier::new()),
            PhaseScheduler::default(),
            SynthesisConfig::default(),
        )
    }
}

/// Synthesize a plan with the default classifier and configuration.
///
/// # Errors
///
/// Returns `SynthesisError::InvalidInput` if `idea_text` is empty or
/// whitespace-only, and `SynthesisError::Integrity` if the generated node
/// graph is malformed.
///
/// # Examples
///
/// ```rust
/// use blueprint_core::{synthesize, SynthesisError};
///
/// let plan = synthesize("A social media platform for pet owners", None).unwrap();
/// assert_eq!(plan.nodes.len(), 9);
///
/// let err = synthesize("   ", None).unwrap_err();
/// assert!(matches!(err, SynthesisError::InvalidInput { .. }));
/// ```
pub fn synthesize(idea_text: &str, description: Option<&str>) -> Result<Plan> {
    Synthesizer::default().synthesize(idea_text, description)
}
