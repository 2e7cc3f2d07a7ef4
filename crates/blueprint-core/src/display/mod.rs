//! Display formatting for plans and node collections.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown for the CLI's terminal renderer and for MCP tool
//! responses. Collection wrappers in [`collections`] cover listings that have
//! no model of their own.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Plan, Node...) │───▶│    wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types (NodeList, RenderedPrompts)
//!
//! ## Usage Examples
//!
//! ```rust
//! use blueprint_core::synthesize;
//!
//! let plan = synthesize("marketplace for handmade ecommerce goods", None).unwrap();
//! let output = plan.to_string();
//! assert!(output.starts_with("# Plan: marketplace for handmade ecommerce goods"));
//! assert!(output.contains("- Features: Web App, E-commerce"));
//! assert!(output.contains("## Phase 1: Foundation"));
//! ```

pub mod collections;
pub mod models;

pub use collections::{NodeList, RenderedPrompts};
