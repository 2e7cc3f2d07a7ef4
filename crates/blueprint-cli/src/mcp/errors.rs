//! Error handling utilities for MCP server

use blueprint_core::SynthesisError;
use rmcp::ErrorData;

/// Convert a synthesis error to an MCP error.
///
/// Bad caller input becomes `invalid_params`; anything else is reported as
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &SynthesisError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
