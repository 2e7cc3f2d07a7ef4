//! MCP server implementation for Blueprint
//!
//! Exposes the synthesis engine as Model Context Protocol tools so an AI
//! assistant can turn an idea into a plan and pull ready-to-use prompts for
//! individual plan nodes.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use blueprint_core::Synthesizer;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{ClassifyIdea, McpResult, NodePrompts, SynthesizeIdea};

/// MCP server for Blueprint
///
/// The synthesizer is immutable, so every tool call shares it without
/// locking.
#[derive(Clone)]
pub struct BlueprintMcpServer {
    synthesizer: Arc<Synthesizer>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BlueprintMcpServer {
    pub fn new(synthesizer: Synthesizer) -> Self {
        Self {
            synthesizer: Arc::new(synthesizer),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.synthesizer.clone())
    }

    #[tool(
        name = "synthesize_plan",
        description = "Turn a free-text app idea into a complete development plan. Provide the idea (required) and an optional longer description. Returns markdown with detected features, tech stack, timeline, budget, team roles and the development tasks grouped into ordered phases. Each task lists its dependencies, tools, resources and prompt templates."
    )]
    async fn synthesize_plan(&self, params: Parameters<SynthesizeIdea>) -> McpResult {
        self.handlers().synthesize_plan(params).await
    }

    #[tool(
        name = "classify_idea",
        description = "Detect which features an app idea implies: web app, mobile app, e-commerce, social, AI. Returns a one-line summary and the tags as JSON. Use it to check how an idea will be interpreted before synthesizing a plan."
    )]
    async fn classify_idea(&self, params: Parameters<ClassifyIdea>) -> McpResult {
        self.handlers().classify_idea(params).await
    }

    #[tool(
        name = "node_prompts",
        description = "Render the ready-to-use prompts of one plan task, with the idea filled in. Provide the idea and a node_id from a synthesized plan (e.g. 'api-development'). Nodes such as 'ai-integration' only exist when the idea triggers the matching feature; asking for a node the plan does not contain is an error."
    )]
    async fn node_prompts(&self, params: Parameters<NodePrompts>) -> McpResult {
        self.handlers().node_prompts(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BlueprintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "blueprint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Blueprint turns a one-line app idea into a phased development plan. Everything is computed locally and deterministically: the same idea always yields the same plan.

## Core Concepts
- **Features**: web app, mobile app, e-commerce, social and AI, detected from keywords in the idea
- **Nodes**: development tasks (architecture, database, UI, API, security, testing, deployment...) with dependencies, tools, resources and prompt templates
- **Phases**: ordered delivery phases; a task never lands in an earlier phase than the tasks it depends on

## Workflow
1. Optionally check the interpretation with `classify_idea`
2. Create the plan with `synthesize_plan`
3. Fetch prompts for a task you are about to work on with `node_prompts`, using a node id from the plan

## Notes
- AI ideas add an `ai-integration` node; mobile ideas add a `mobile-development` node
- Timeline, budget and team roles are configured defaults, not estimates derived from the idea"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BlueprintMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Blueprint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
