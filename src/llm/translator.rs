//! Tool schema translation for the inference boundary
//!
//! The inference endpoint wants `parameters` where MCP says `inputSchema`.
//! Translation is a pure key-renaming pass: schema content is copied
//! verbatim, order is preserved, nothing is validated here. A malformed
//! schema flows through and surfaces, if at all, as an inference failure.

use crate::mcp::types::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool reshaped for the inference call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatedTool {
    /// Tool name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Input schema, renamed from the MCP `inputSchema` key
    pub parameters: Value,
}

/// Translate aggregated MCP tools into the inference parameter shape
pub fn translate_tools(tools: &[Tool]) -> Vec<TranslatedTool> {
    tools
        .iter()
        .map(|tool| TranslatedTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.input_schema.clone(),
        })
        .collect()
}
