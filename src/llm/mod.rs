//! LLM inference boundary
//!
//! This module reshapes aggregated MCP tools into the parameter shape the
//! inference endpoint expects and issues the single chat call per request.

pub mod client;
pub mod translator;

// Re-export main types
pub use client::{DispatchResult, InferenceClient};
pub use translator::{translate_tools, TranslatedTool};
