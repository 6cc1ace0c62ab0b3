use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Agent configuration, resolved once at startup.
///
/// Values come from an optional TOML file with the `AGENT_PORT` and
/// `API_URL` environment variables taking precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Port for the local trigger endpoint.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the collector (no trailing path).
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_port() -> u16 {
    8081
}

fn default_api_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_url: default_api_url(),
        }
    }
}

impl AgentConfig {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{path}'"))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{path}'"))?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("AGENT_PORT") {
            config.port = port.parse().context("invalid AGENT_PORT")?;
        }
        if let Ok(url) = std::env::var("API_URL") {
            config.api_url = url;
        }
        Ok(config)
    }
}
