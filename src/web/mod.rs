//! HTTP server layer
//!
//! Exposes the chat endpoint and health check; all orchestration per
//! incoming message lives in [`server::GatewayServer`].

mod server;

pub use server::{chat_handler, health_check, GatewayServer};
