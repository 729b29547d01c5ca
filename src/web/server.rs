//! Gateway HTTP server and per-request orchestration
//!
//! One POST to `/` runs the full pipeline: aggregate provider
//! capabilities, translate their schemas, compose the system prompt,
//! dispatch the inference call and render the outcome as plain text.
//! Malformed input is the only failure a caller sees as a non-200.

use crate::config::Config;
use crate::error::Result;
use crate::llm::client::{DispatchResult, InferenceClient};
use crate::llm::translator::translate_tools;
use crate::mcp::aggregator::CapabilityAggregator;
use crate::mcp::client::{HttpMcpClient, McpConnector};
use crate::prompt::compose_system_prompt;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Fixed 400 body for unparseable input
const PARSE_ERROR_BODY: &str = "Error parsing input";

/// The chat gateway: per-request orchestrator plus server bootstrap
pub struct GatewayServer {
    aggregator: CapabilityAggregator,
    inference: InferenceClient,
    credential: Option<String>,
}

impl GatewayServer {
    /// Create a gateway from configuration and an externally resolved
    /// credential
    pub fn new(config: &Config, credential: Option<String>) -> Result<Self> {
        let connector: Arc<dyn McpConnector> = Arc::new(HttpMcpClient::new()?);
        Ok(Self {
            aggregator: CapabilityAggregator::new(config.providers.clone(), connector),
            inference: InferenceClient::new(config.inference.clone())?,
            credential,
        })
    }

    /// Handle one chat message end to end and produce the response body
    pub async fn handle_message(&self, message: &str) -> String {
        let (tools, outcomes) = self.aggregator.aggregate(self.credential.as_deref()).await;
        debug!(
            "Aggregated {} tools from {} attempted providers",
            tools.len(),
            outcomes.len()
        );

        let translated = translate_tools(&tools);
        let system_prompt = compose_system_prompt(&outcomes);

        match self.inference.dispatch(&system_prompt, message, &translated).await {
            Ok(DispatchResult::ToolCall { name }) => format!("🛠️ Using Tool: {}...", name),
            Ok(DispatchResult::Text { body }) => body,
            Err(e) => {
                error!("Inference call failed: {}", e);
                format!("AI Error: {}", e)
            }
        }
    }

    /// Bind and run the HTTP server
    pub async fn start(self, host: &str, port: u16) -> Result<()> {
        info!("Starting chat gateway on {}:{}", host, port);

        let gateway = web::Data::new(Arc::new(self));
        HttpServer::new(move || {
            App::new()
                .app_data(gateway.clone())
                .wrap(Logger::default())
                .route("/health", web::get().to(health_check))
                .route("/", web::post().to(chat_handler))
        })
        .bind(format!("{}:{}", host, port))?
        .run()
        .await?;

        debug!("Chat gateway stopped");
        Ok(())
    }
}

/// Extract the `text` field from the raw request body
///
/// Any deviation (invalid JSON, missing field, non-string value) is a
/// malformed input, not a recoverable condition.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("text")?.as_str().map(str::to_string)
}

/// POST `/` chat endpoint
pub async fn chat_handler(
    body: web::Bytes,
    gateway: web::Data<Arc<GatewayServer>>,
) -> HttpResponse {
    let Some(message) = extract_message(&body) else {
        return HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(PARSE_ERROR_BODY);
    };

    let reply = gateway.handle_message(&message).await;
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(reply)
}

/// GET `/health` endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "toolbridge"
    }))
}
