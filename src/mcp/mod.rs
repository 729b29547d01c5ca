//! MCP provider boundary
//!
//! This module contains the types and client used to talk to remote MCP
//! tool providers, and the aggregator that merges their advertised
//! capabilities per request.

pub mod aggregator;
pub mod client;
pub mod types;

// Re-export main types
pub use aggregator::{CapabilityAggregator, ConnectOutcome};
pub use client::{HttpMcpClient, McpConnector};
pub use types::{McpError, McpRequest, McpResponse, Tool};
