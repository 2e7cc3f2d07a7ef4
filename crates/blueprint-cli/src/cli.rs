//! Command handlers and clap argument wrappers
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! interface-agnostic parameter type from `blueprint_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Synthesizer
//! ```
//!
//! Handlers render markdown through the [`TerminalRenderer`] or, with
//! `--json`, print pretty JSON to stdout.

use anyhow::{Context, Result};
use blueprint_core::{
    catalog::{baseline_nodes, conditional_nodes},
    params::{ClassifyIdea, NodePrompts, SynthesizeIdea},
    FeatureTag, FeatureTags, NodeList, RenderedPrompts, SynthesisConfig, Synthesizer,
};
use clap::Args;
use log::info;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Synthesize a full plan from an idea
#[derive(Args)]
pub struct SynthArgs {
    /// Free-text description of the app idea
    pub idea: String,
    /// Optional longer description to carry into the plan
    #[arg(short, long, help = "Optional longer description to carry into the plan")]
    pub description: Option<String>,
    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<SynthArgs> for SynthesizeIdea {
    fn from(val: SynthArgs) -> Self {
        SynthesizeIdea {
            idea: val.idea,
            description: val.description,
        }
    }
}

/// Show which feature tags an idea triggers
#[derive(Args)]
pub struct ClassifyArgs {
    /// Free-text description of the app idea
    pub idea: String,
    /// Print the tags as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<ClassifyArgs> for ClassifyIdea {
    fn from(val: ClassifyArgs) -> Self {
        ClassifyIdea { idea: val.idea }
    }
}

/// Print the prompts of one plan node with the idea filled in
#[derive(Args)]
pub struct PromptArgs {
    /// Free-text description of the app idea
    pub idea: String,
    /// Node id, as shown by `bp catalog`
    #[arg(help = "Node id, e.g. api-development (see `bp catalog`)")]
    pub node_id: String,
}

impl From<PromptArgs> for NodePrompts {
    fn from(val: PromptArgs) -> Self {
        NodePrompts {
            idea: val.idea,
            node_id: val.node_id,
        }
    }
}

/// List the node catalog
#[derive(Args)]
pub struct CatalogArgs {
    /// Also list the nodes that are only added for some features
    #[arg(long)]
    pub all: bool,
    /// Print the nodes as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Show or initialize the configuration
#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default configuration to the user configuration file
    #[arg(long)]
    pub init: bool,
}

/// Command handlers bound to one synthesizer and renderer.
pub struct Cli {
    synthesizer: Synthesizer,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(synthesizer: Synthesizer, renderer: TerminalRenderer) -> Self {
        Self {
            synthesizer,
            renderer,
        }
    }

    pub fn synth(&self, args: SynthArgs) -> Result<()> {
        let json = args.json;
        let params = SynthesizeIdea::from(args);

        let plan = self
            .synthesizer
            .synthesize_params(&params)
            .context("Failed to synthesize plan")?;
        info!(
            "synthesized plan with {} nodes in {} phases",
            plan.node_count(),
            plan.phases.len()
        );

        if json {
            print_json(&plan)
        } else {
            self.renderer.render(&plan.to_string())
        }
    }

    pub fn classify(&self, args: ClassifyArgs) -> Result<()> {
        let json = args.json;
        let params = ClassifyIdea::from(args);

        let tags = self
            .synthesizer
            .classify_params(&params)
            .context("Failed to classify idea")?;

        if json {
            print_json(&tags)
        } else {
            self.renderer.render(&format_tags(&params.idea, &tags))
        }
    }

    pub fn prompt(&self, args: PromptArgs) -> Result<()> {
        let params = NodePrompts::from(args);

        let prompts = self
            .synthesizer
            .node_prompts_params(&params)
            .with_context(|| format!("Failed to render prompts for '{}'", params.node_id))?;

        self.renderer
            .render(&RenderedPrompts::new(params.node_id, prompts).to_string())
    }

    pub fn catalog(&self, args: CatalogArgs) -> Result<()> {
        let baseline = baseline_nodes();
        let conditional = if args.all {
            conditional_nodes(&FeatureTags::default().with(FeatureTag::Ai).with(FeatureTag::Mobile))
        } else {
            Vec::new()
        };

        if args.json {
            let mut nodes = baseline;
            nodes.extend(conditional);
            return print_json(&nodes);
        }

        let mut output = format!("# Node Catalog\n\n{}", NodeList(baseline));
        if args.all {
            output.push_str(&format!(
                "\n## Added For Some Features\n\n{}",
                NodeList(conditional)
            ));
        }
        self.renderer.render(&output)
    }

    pub fn config(&self, args: ConfigArgs) -> Result<()> {
        if args.init {
            let path = SynthesisConfig::default()
                .write_user_config()
                .context("Failed to write configuration")?;
            info!("wrote default configuration to {}", path.display());
            println!("{}", path.display());
            return Ok(());
        }
        print_json(self.synthesizer.config())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn format_tags(idea: &str, tags: &FeatureTags) -> String {
    let mut output = format!("# Features: {}\n\n", idea.trim());
    for tag in FeatureTag::ALL {
        let mark = if tags.get(tag) { "x" } else { " " };
        output.push_str(&format!("- [{mark}] {}\n", tag.label()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_args_into_params() {
        let params = SynthesizeIdea::from(SynthArgs {
            idea: "A recipe website".to_string(),
            description: Some("Family recipes".to_string()),
            json: true,
        });
        assert_eq!(params.idea, "A recipe website");
        assert_eq!(params.description.as_deref(), Some("Family recipes"));
    }

    #[test]
    fn test_format_tags_marks_active_tags() {
        let tags = FeatureTags::default().with(FeatureTag::Social);
        let output = format_tags("  A chat app  ", &tags);

        assert!(output.starts_with("# Features: A chat app"));
        assert!(output.contains("- [x] Social"));
        assert!(output.contains("- [ ] Web App"));
        assert_eq!(output.matches("- [").count(), FeatureTag::ALL.len());
    }
}
