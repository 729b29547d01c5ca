//! HTTP MCP client
//!
//! Connects to a remote MCP provider over HTTP and retrieves its
//! advertised tool list. Each attempt is single-shot: a failed request is
//! final for the current chat turn, the next turn reconnects from scratch.

use crate::config::ProviderConfig;
use crate::error::{GatewayError, Result};
use crate::mcp::types::{McpRequest, McpResponse, Tool};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

/// Connector for retrieving tool capabilities from an MCP provider
///
/// The aggregator drives this trait over the whole registry; tests
/// substitute mock implementations.
#[async_trait]
pub trait McpConnector: Send + Sync {
    /// Establish a session with the provider and list its tools
    async fn list_tools(
        &self,
        provider: &ProviderConfig,
        credential: Option<&str>,
    ) -> Result<Vec<Tool>>;
}

/// HTTP client for MCP-over-HTTP providers
#[derive(Debug, Clone)]
pub struct HttpMcpClient {
    http_client: Client,
}

impl HttpMcpClient {
    /// Create a new HTTP MCP client with a shared connection pool
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("toolbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                GatewayError::connection(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl McpConnector for HttpMcpClient {
    async fn list_tools(
        &self,
        provider: &ProviderConfig,
        credential: Option<&str>,
    ) -> Result<Vec<Tool>> {
        let url = Url::parse(&provider.base_url).map_err(|e| {
            GatewayError::validation(format!(
                "Invalid provider URL '{}': {}",
                provider.base_url, e
            ))
        })?;

        let request = McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(Uuid::new_v4().to_string())),
            method: "tools/list".to_string(),
            params: None,
        };

        debug!("Requesting tool list from provider '{}'", provider.id);

        let mut req_builder = self
            .http_client
            .post(url)
            .timeout(Duration::from_secs(provider.timeout))
            .header("Content-Type", "application/json")
            .json(&request);

        // Unauthenticated providers get no authorization header at all
        if provider.requires_auth {
            let token = credential.ok_or_else(|| {
                GatewayError::connection(format!(
                    "Provider '{}' requires a credential but none is available",
                    provider.id
                ))
            })?;
            req_builder = req_builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = req_builder.send().await.map_err(|e| {
            GatewayError::connection(format!("Request to provider '{}' failed: {}", provider.id, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::connection(format!(
                "HTTP {} from provider '{}': {}",
                status, provider.id, error_text
            )));
        }

        let mcp_response: McpResponse = response.json().await.map_err(|e| {
            GatewayError::mcp(format!(
                "Invalid MCP response from provider '{}': {}",
                provider.id, e
            ))
        })?;

        if let Some(error) = mcp_response.error {
            return Err(GatewayError::mcp(format!(
                "MCP error from provider '{}': {}",
                provider.id, error.message
            )));
        }

        let result = mcp_response
            .result
            .ok_or_else(|| GatewayError::mcp("Empty response from tools/list"))?;
        let tools_value = result
            .get("tools")
            .ok_or_else(|| GatewayError::mcp("Missing 'tools' field in tools/list response"))?;
        let tools: Vec<Tool> = serde_json::from_value(tools_value.clone())
            .map_err(|e| GatewayError::mcp(format!("Invalid tools format: {}", e)))?;

        info!(
            "Retrieved {} tools from MCP provider '{}'",
            tools.len(),
            provider.id
        );
        Ok(tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: &str, requires_auth: bool) -> ProviderConfig {
        ProviderConfig {
            id: "test".to_string(),
            base_url: base_url.to_string(),
            requires_auth,
            timeout: 5,
        }
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_validation_error() {
        let client = HttpMcpClient::new().unwrap();
        let err = client
            .list_tools(&provider("not-a-url", false), None)
            .await
            .unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[tokio::test]
    async fn test_auth_required_without_credential_fails_locally() {
        let client = HttpMcpClient::new().unwrap();
        let err = client
            .list_tools(&provider("http://localhost:1/mcp", true), None)
            .await
            .unwrap_err();
        assert_eq!(err.category(), "connection");
    }
}
