//! Toolbridge - Chat gateway over aggregated MCP tool capabilities
//!
//! This crate implements a per-message request handler that connects to a
//! fixed registry of remote MCP tool providers, aggregates their
//! advertised tools, forwards the message plus toolset to an LLM
//! inference call, and answers with either a tool-usage notice or the
//! model's free text.

pub mod config;
pub mod error;
pub mod llm;
pub mod mcp;
pub mod prompt;
pub mod web;

pub use config::{Config, InferenceConfig, ProviderConfig, ServerConfig};
pub use error::{GatewayError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "toolbridge.yaml";

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 3001;
