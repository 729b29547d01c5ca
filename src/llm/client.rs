//! Inference client
//!
//! Issues the single chat call per request and interprets the response as
//! either a proposed tool invocation or free text.

use crate::config::InferenceConfig;
use crate::error::{GatewayError, Result};
use crate::llm::translator::TranslatedTool;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Result of one inference call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The model proposed at least one tool invocation; only the first
    /// proposal is surfaced
    ToolCall { name: String },
    /// The model answered with free text
    Text { body: String },
}

/// Fallback body when the engine returns neither tool calls nor text
const NO_RESPONSE_FALLBACK: &str = "No response received.";

/// Client for the LLM inference endpoint
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: InferenceConfig,
    http_client: reqwest::Client,
}

impl InferenceClient {
    /// Create a new inference client with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| {
                GatewayError::config(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Issue one chat call with the aggregated toolset
    ///
    /// Callers are expected to downgrade any `Err` into a textual answer;
    /// an inference outage degrades quality, not availability.
    pub async fn dispatch(
        &self,
        system_prompt: &str,
        user_message: &str,
        tools: &[TranslatedTool],
    ) -> Result<DispatchResult> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_message }
            ],
            "tools": tools,
        });

        debug!(
            "Dispatching inference call: model={}, tools={}",
            self.config.model,
            tools.len()
        );

        let mut req_builder = self
            .http_client
            .post(&self.config.base_url)
            .header("Content-Type", "application/json")
            .json(&payload);

        if let Some(env_var) = &self.config.api_key_env {
            let api_key = std::env::var(env_var).map_err(|_| {
                GatewayError::config(format!("Environment variable {} not found", env_var))
            })?;
            req_builder = req_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| GatewayError::inference(format!("Inference request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::inference(format!(
                "Inference API error: {}",
                error_text
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            GatewayError::inference(format!("Failed to parse inference response: {}", e))
        })?;

        Self::interpret_response(&body)
    }

    /// Decide whether the engine proposed a tool call or answered in text
    fn interpret_response(body: &Value) -> Result<DispatchResult> {
        if let Some(tool_calls) = body.get("tool_calls").and_then(|v| v.as_array()) {
            if let Some(first) = tool_calls.first() {
                let name = first
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        GatewayError::inference("Tool call entry is missing a name")
                    })?;
                return Ok(DispatchResult::ToolCall {
                    name: name.to_string(),
                });
            }
        }

        let text = body
            .get("response")
            .and_then(|v| v.as_str())
            .unwrap_or(NO_RESPONSE_FALLBACK);
        Ok(DispatchResult::Text {
            body: text.to_string(),
        })
    }
}
