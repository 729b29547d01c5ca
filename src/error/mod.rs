//! Error handling module for the chat gateway
//!
//! This module provides the error types and utilities shared across the gateway.

mod error;

// Re-export the main error types and utilities
pub use error::{GatewayError, Result};
