//! Configuration module for the chat gateway
//!
//! This module provides configuration management and loading utilities.

mod config;

// Re-export the main configuration types
pub use config::{Config, InferenceConfig, ProviderConfig, ServerConfig};
