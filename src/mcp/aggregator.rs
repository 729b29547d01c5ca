//! Capability aggregation across the provider registry
//!
//! Drives the connector over every configured provider in registry order
//! and merges the successful tool lists. Provider failures are isolated:
//! one unreachable provider only loses its own tools.

use crate::config::ProviderConfig;
use crate::mcp::client::McpConnector;
use crate::mcp::types::Tool;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one provider connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOutcome {
    /// Provider identifier from the registry
    pub provider_id: String,
    /// Whether the tool list was retrieved
    pub succeeded: bool,
}

/// Aggregates tool capabilities from the provider registry
pub struct CapabilityAggregator {
    registry: Vec<ProviderConfig>,
    connector: Arc<dyn McpConnector>,
}

impl CapabilityAggregator {
    /// Create a new aggregator over a fixed registry
    pub fn new(registry: Vec<ProviderConfig>, connector: Arc<dyn McpConnector>) -> Self {
        Self {
            registry,
            connector,
        }
    }

    /// Connect to every eligible provider and merge their tool lists
    ///
    /// Providers requiring auth are skipped entirely when no credential is
    /// present and produce no outcome entry. Otherwise each attempt yields
    /// exactly one outcome, in registry order. This never fails; the worst
    /// case is an empty toolset with every outcome marked failed.
    pub async fn aggregate(&self, credential: Option<&str>) -> (Vec<Tool>, Vec<ConnectOutcome>) {
        let mut all_tools = Vec::new();
        let mut outcomes = Vec::new();

        for provider in &self.registry {
            if provider.requires_auth && credential.is_none() {
                debug!(
                    "Skipping provider '{}': requires auth and no credential is set",
                    provider.id
                );
                continue;
            }

            match self.connector.list_tools(provider, credential).await {
                Ok(tools) => {
                    all_tools.extend(tools);
                    outcomes.push(ConnectOutcome {
                        provider_id: provider.id.clone(),
                        succeeded: true,
                    });
                }
                Err(e) => {
                    warn!("Provider '{}' connection failed: {}", provider.id, e);
                    outcomes.push(ConnectOutcome {
                        provider_id: provider.id.clone(),
                        succeeded: false,
                    });
                }
            }
        }

        (all_tools, outcomes)
    }
}
