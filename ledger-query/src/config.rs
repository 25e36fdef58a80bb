//! Configuration for the query client

use serde::{Deserialize, Serialize};

/// Query client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name, for logs
    pub service_name: String,

    /// Node JSON-RPC endpoint
    pub rpc_url: String,

    /// Per-request timeout (seconds)
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "ledger-query".to_string(),
            rpc_url: crate::DEFAULT_RPC_URL.to_string(),
            timeout_seconds: crate::DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML text; missing keys keep their defaults
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(url) = std::env::var("LEDGER_QUERY_RPC_URL") {
            config.rpc_url = url;
        }

        if let Ok(timeout) = std::env::var("LEDGER_QUERY_TIMEOUT_SECONDS") {
            config.timeout_seconds = timeout.parse().map_err(|e| {
                crate::Error::Config(format!(
                    "Invalid LEDGER_QUERY_TIMEOUT_SECONDS {:?}: {}",
                    timeout, e
                ))
            })?;
        }

        Ok(config)
    }
}
