//! Runtime configuration
//!
//! Loaded from a JSON file when a path is given on the command line,
//! otherwise every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use folio_core::viewport::ViewportConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick_ms must be at least 1")]
    ZeroTick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Seed for the deterministic RNG driving particle styling
    pub seed: u64,
    /// Fixed step between page ticks, in milliseconds
    pub tick_ms: u64,
    /// Total length of the scripted session, in milliseconds
    pub session_ms: u64,
    pub viewport: ViewportConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            tick_ms: 10,
            session_ms: 20_000,
            viewport: ViewportConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(config)
    }
}
