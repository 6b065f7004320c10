//! Error types for run-fatal failures.
//!
//! Failures of a single target never show up here: the prober turns them
//! into verdicts so that the probing loop keeps going.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read URL list {}: {source}", path.display())]
    UrlList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Login failed: {0}")]
    Authentication(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Pre-flight errors stop the run before a single target is probed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProbeError::Config(_)
                | ProbeError::UrlList { .. }
                | ProbeError::ConfigFile { .. }
                | ProbeError::Yaml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
