use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Collector configuration, resolved once at startup.
///
/// Values come from an optional TOML file with the `API_PORT` and `DATA_DIR`
/// environment variables taking precedence. A missing config file is not an
/// error; defaults apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Storage root for persisted artifact pairs, created if missing.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            data_dir: default_data_dir(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{path}'"))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{path}'"))?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("API_PORT") {
            config.port = port.parse().context("invalid API_PORT")?;
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            config.data_dir = dir;
        }
        Ok(config)
    }
}
