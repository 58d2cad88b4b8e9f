use std::path::PathBuf;
use thiserror::Error;

/// The central error type for the algotutor engine.
///
/// The classify/generate pipeline itself is total: every utterance produces
/// a well-formed response. Errors only arise at the edges: loading
/// configuration, or an alternative [`ResponseSource`](crate::ResponseSource)
/// implementation that talks to a remote model.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("Response source error: {0}")]
    Source(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TutorError>;
