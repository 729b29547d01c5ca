//! Configuration types and loading for the chat gateway

use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Top-level gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote MCP tool providers, in aggregation order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// LLM inference settings
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Environment variable holding the provider credential
    #[serde(default = "default_credential_env")]
    pub credential_env: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Remote MCP tool provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Unique, stable provider identifier
    pub id: String,
    /// Base URL of the provider's MCP endpoint
    pub base_url: String,
    /// Whether this provider requires a bearer credential
    #[serde(default)]
    pub requires_auth: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// LLM inference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// URL of the inference endpoint
    #[serde(default = "default_inference_url")]
    pub base_url: String,
    /// Model identifier to request
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the inference API key, if the
    /// endpoint requires one
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_inference_timeout")]
    pub timeout: u64,
}

fn default_host() -> String {
    crate::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    crate::DEFAULT_PORT
}

fn default_timeout() -> u64 {
    30
}

fn default_inference_timeout() -> u64 {
    60
}

fn default_inference_url() -> String {
    "http://localhost:8000/v1/infer".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instruct".to_string()
}

fn default_credential_env() -> String {
    "PROVIDER_API_TOKEN".to_string()
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            id: "docs".to_string(),
            base_url: "https://docs.mcp.cloudflare.com/mcp".to_string(),
            requires_auth: false,
            timeout: default_timeout(),
        },
        ProviderConfig {
            id: "radar".to_string(),
            base_url: "https://radar.mcp.cloudflare.com/mcp".to_string(),
            requires_auth: true,
            timeout: default_timeout(),
        },
        ProviderConfig {
            id: "bindings".to_string(),
            base_url: "https://bindings.mcp.cloudflare.com/mcp".to_string(),
            requires_auth: true,
            timeout: default_timeout(),
        },
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_inference_url(),
            model: default_model(),
            api_key_env: None,
            timeout: default_inference_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            inference: InferenceConfig::default(),
            credential_env: default_credential_env(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::config("Server port must be non-zero"));
        }
        if self.inference.model.trim().is_empty() {
            return Err(GatewayError::config("Inference model must not be empty"));
        }
        Url::parse(&self.inference.base_url).map_err(|e| {
            GatewayError::config(format!(
                "Invalid inference URL '{}': {}",
                self.inference.base_url, e
            ))
        })?;

        let mut seen = HashSet::new();
        for provider in &self.providers {
            if provider.id.trim().is_empty() {
                return Err(GatewayError::config("Provider id must not be empty"));
            }
            if !seen.insert(provider.id.as_str()) {
                return Err(GatewayError::config(format!(
                    "Duplicate provider id '{}'",
                    provider.id
                )));
            }
            Url::parse(&provider.base_url).map_err(|e| {
                GatewayError::config(format!(
                    "Invalid provider URL '{}': {}",
                    provider.base_url, e
                ))
            })?;
        }
        Ok(())
    }

    /// Resolve the provider credential from the environment
    ///
    /// An unset or empty variable yields `None`; providers requiring auth
    /// are then skipped rather than failing the request.
    pub fn credential(&self) -> Option<String> {
        match std::env::var(&self.credential_env) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.providers.len(), 3);
        assert!(!config.providers[0].requires_auth);
        assert!(config.providers[1].requires_auth);
        assert!(config.providers[2].requires_auth);
    }

    #[test]
    fn test_registry_order_is_stable() {
        let config = Config::default();
        let ids: Vec<&str> = config.providers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["docs", "radar", "bindings"]);
    }

    #[test]
    fn test_yaml_parsing_with_defaults() {
        let yaml = r#"
server:
  port: 9000
providers:
  - id: local
    base_url: http://localhost:9001/mcp
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, crate::DEFAULT_HOST);
        assert_eq!(config.providers.len(), 1);
        assert!(!config.providers[0].requires_auth);
        assert_eq!(config.providers[0].timeout, 30);
        assert_eq!(config.inference.timeout, 60);
    }

    #[test]
    fn test_duplicate_provider_ids_rejected() {
        let mut config = Config::default();
        config.providers[1].id = "docs".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_invalid_provider_url_rejected() {
        let mut config = Config::default();
        config.providers[0].base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/toolbridge.yaml").unwrap();
        assert_eq!(config.providers.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbridge.yaml");
        std::fs::write(&path, "server:\n  host: 127.0.0.1\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, crate::DEFAULT_PORT);
    }
}
