use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration for the API server.
///
/// Everything has a sensible default so a bare `nibble-api` starts a local
/// server persisting to `food-ideas.json` in the working directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "NIBBLE_API_BIND_ADDR", "127.0.0.1:4000");
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(
                "NIBBLE_API_BIND_ADDR must be a host:port socket address".to_string(),
            ));
        }

        let data_file = PathBuf::from(value_or_default(
            &lookup,
            "NIBBLE_DATA_FILE",
            "food-ideas.json",
        ));

        Ok(Self {
            bind_addr,
            data_file,
        })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .unwrap_or_else(|| default.to_string())
}
