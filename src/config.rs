//! Engine Configuration
//!
//! Loads and manages tutor configuration from TOML files.
//! Configuration covers the boundary behavior only; the classification and
//! generation rules themselves are fixed:
//! - Conversation-context retention cap
//! - Simulated response latency for callers expecting network-like timing
//! - Language tag attached to emitted code examples

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{Result, TutorError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Maximum number of prior messages the façade retains per call.
    #[serde(default = "default_max_context_messages")]
    pub max_context_messages: usize,

    /// Artificial delay before the response is returned, in milliseconds.
    /// Zero disables the delay. The chat UI expects network-like latency
    /// from a response source; this keeps the mock source believable.
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Language tag stamped onto emitted code examples.
    #[serde(default = "default_language_tag")]
    pub language_tag: String,
}

fn default_max_context_messages() -> usize {
    50
}

fn default_language_tag() -> String {
    "javascript".to_string()
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            max_context_messages: default_max_context_messages(),
            simulated_latency_ms: 0,
            language_tag: default_language_tag(),
        }
    }
}

impl TutorConfig {
    /// Loads configuration from a TOML file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TutorError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TutorConfig = toml::from_str(content)
            .context("Failed to parse tutor configuration")
            .map_err(TutorError::Other)?;
        Ok(config)
    }
}
