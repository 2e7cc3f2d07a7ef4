//! MCP tool handlers implementation

use std::sync::Arc;

use blueprint_core::{display::RenderedPrompts, params as core, Synthesizer};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type, and the schema is the core type's schema, so the core
/// params stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type SynthesizeIdea = McpParams<core::SynthesizeIdea>;
pub type ClassifyIdea = McpParams<core::ClassifyIdea>;
pub type NodePrompts = McpParams<core::NodePrompts>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    synthesizer: Arc<Synthesizer>,
}

impl McpHandlers {
    pub fn new(synthesizer: Arc<Synthesizer>) -> Self {
        Self { synthesizer }
    }

    pub async fn synthesize_plan(
        &self,
        Parameters(params): Parameters<SynthesizeIdea>,
    ) -> McpResult {
        debug!("synthesize_plan: {:?}", params);

        let plan = self
            .synthesizer
            .synthesize_params(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to synthesize plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(plan.to_string())]))
    }

    pub async fn classify_idea(&self, Parameters(params): Parameters<ClassifyIdea>) -> McpResult {
        debug!("classify_idea: {:?}", params);

        let tags = self
            .synthesizer
            .classify_params(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to classify idea", &e))?;

        let json = serde_json::to_string_pretty(&tags)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![
            Content::text(format!("Features: {tags}")),
            Content::text(json),
        ]))
    }

    pub async fn node_prompts(&self, Parameters(params): Parameters<NodePrompts>) -> McpResult {
        debug!("node_prompts: {:?}", params);

        let inner = params.as_ref();
        let prompts = self
            .synthesizer
            .node_prompts_params(inner)
            .map_err(|e| to_mcp_error("Failed to render node prompts", &e))?;

        let rendered = RenderedPrompts::new(inner.node_id.clone(), prompts);
        Ok(CallToolResult::success(vec![Content::text(
            rendered.to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use blueprint_core::SynthesizerBuilder;
    use rmcp::model::ErrorCode;

    use super::*;

    fn create_test_handlers() -> McpHandlers {
        let synthesizer = SynthesizerBuilder::new()
            .without_user_config()
            .build()
            .expect("Failed to create synthesizer");
        McpHandlers::new(Arc::new(synthesizer))
    }

    fn first_text(result: &CallToolResult) -> String {
        let json = serde_json::to_value(result).expect("Failed to serialize result");
        json["content"][0]["text"]
            .as_str()
            .expect("first content is not text")
            .to_string()
    }

    fn params<T>(json: serde_json::Value) -> Parameters<McpParams<T>>
    where
        T: JsonSchema + serde::de::DeserializeOwned,
    {
        Parameters(serde_json::from_value(json).expect("Failed to parse params"))
    }

    #[tokio::test]
    async fn test_synthesize_plan_tool() {
        let result = create_test_handlers()
            .synthesize_plan(params(serde_json::json!({
                "idea": "AI-powered mobile app for language learning"
            })))
            .await
            .unwrap();

        let text = first_text(&result);
        assert!(text.starts_with("# Plan: AI-powered mobile app for language learning"));
        assert!(text.contains("`ai-integration`"));
        assert!(text.contains("`mobile-development`"));
    }

    #[tokio::test]
    async fn test_synthesize_plan_rejects_blank_idea() {
        let err = create_test_handlers()
            .synthesize_plan(params(serde_json::json!({ "idea": "  " })))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_classify_idea_tool() {
        let result = create_test_handlers()
            .classify_idea(params(serde_json::json!({
                "idea": "A social media platform for pet owners"
            })))
            .await
            .unwrap();

        assert_eq!(first_text(&result), "Features: Web App, Social");
    }

    #[tokio::test]
    async fn test_node_prompts_tool() {
        let result = create_test_handlers()
            .node_prompts(params(serde_json::json!({
                "idea": "A recipe website",
                "node_id": "ui-design"
            })))
            .await
            .unwrap();

        let text = first_text(&result);
        assert!(text.contains("# Prompts for `ui-design`"));
        assert!(text.contains("A recipe website"));

        let err = create_test_handlers()
            .node_prompts(params(serde_json::json!({
                "idea": "A recipe website",
                "node_id": "nope"
            })))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
