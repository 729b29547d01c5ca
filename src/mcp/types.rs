//! MCP protocol types
//!
//! Type definitions for the subset of the MCP protocol the gateway
//! consumes: tool descriptors and JSON-RPC request/response framing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP tool definition as advertised by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique within a provider)
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// JSON Schema for input parameters, passed through unvalidated
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// MCP JSON-RPC request message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID (can be string, number, or null for notifications)
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Parameters
    pub params: Option<Value>,
}

/// MCP JSON-RPC response message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID this responds to
    pub id: Value,
    /// Result (if successful)
    pub result: Option<Value>,
    /// Error (if failed)
    pub error: Option<McpError>,
}

/// MCP JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Optional additional data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
