//! Data models for synthesized plans.
//!
//! This module contains the value types produced by a synthesis call: the
//! [`FeatureTags`] an idea is classified into, the [`Node`]s of work, the
//! [`Phase`]s they are scheduled into and the [`Plan`] that owns them all.
//! Display implementations live in [`crate::display::models`] so the data
//! structures stay free of presentation logic.
//!
//! Every model is an immutable value: a synthesis call builds a fresh
//! [`Plan`] and nothing is shared between plans.
//!
//! # Examples
//!
//! ```rust
//! use blueprint_core::models::{FeatureTag, FeatureTags};
//!
//! let tags = FeatureTags::default()
//!     .with(FeatureTag::Web)
//!     .with(FeatureTag::Social);
//! assert!(tags.is_web_app);
//! assert_eq!(tags.active(), vec![FeatureTag::Web, FeatureTag::Social]);
//! ```

pub mod attributes;
pub mod node;
pub mod phase;
pub mod plan;
pub mod tags;

#[cfg(test)]
mod tests;

pub use attributes::{Category, Complexity, Priority};
pub use node::{Node, IDEA_PLACEHOLDER};
pub use phase::Phase;
pub use plan::Plan;
pub use tags::{FeatureTag, FeatureTags};
