//! Core library for the Blueprint idea-to-plan synthesis engine.
//!
//! Given free text describing an app idea, the engine classifies the idea
//! along a few feature axes, instantiates a catalog of development task
//! nodes (plus optional nodes for some features), schedules the nodes into
//! delivery phases by dependency depth and recommends a tech stack. The
//! result is a [`Plan`] value; nothing is persisted and no network is used.
//!
//! # Pipeline
//!
//! - [`classifier`]: idea text to [`FeatureTags`], behind the
//!   [`IdeaClassifier`] trait
//! - [`catalog`]: baseline node DAG and conditional node injection
//! - [`scheduler`]: dependency-depth phase assignment
//! - [`stack`]: tech stack inference
//! - [`synthesizer`]: the [`Synthesizer`] tying it together, plus the
//!   assembler and builder
//!
//! # Quick Start
//!
//! ```rust
//! use blueprint_core::synthesize;
//!
//! let plan = synthesize("AI-powered mobile app for language learning", None)?;
//!
//! assert_eq!(plan.nodes.len(), 11);
//! assert!(plan.tech_stack.contains(&"React Native".to_string()));
//! for phase in &plan.phases {
//!     println!("{}: {} nodes", phase.name, phase.nodes.len());
//! }
//! # Ok::<(), blueprint_core::SynthesisError>(())
//! ```

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod stack;
pub mod synthesizer;

// Re-export commonly used types
pub use classifier::{IdeaClassifier, KeywordClassifier};
pub use config::SynthesisConfig;
pub use display::{NodeList, RenderedPrompts};
pub use error::{Result, SynthesisError};
pub use models::{
    Category, Complexity, FeatureTag, FeatureTags, Node, Phase, Plan, Priority,
};
pub use params::{ClassifyIdea, NodePrompts, SynthesizeIdea};
pub use scheduler::PhaseScheduler;
pub use synthesizer::{synthesize, Synthesizer, SynthesizerBuilder};
