use std::path::Path;

use serde::Deserialize;

use crate::error::{ProbeError, Result};

/// Optional YAML configuration for the probe.
/// Every field is optional; anything left out keeps the environment or built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeFileConfig {
    /// Error signatures searched for in response bodies.
    /// Replaces the built-in list entirely when given.
    pub signatures: Option<Vec<String>>,

    /// Inspect only the first N bytes of each body.
    pub signature_scan_limit: Option<usize>,

    /// User-Agent sent with every request.
    pub user_agent: Option<String>,

    /// Login endpoint. `LOGIN_URL` in the environment takes precedence.
    pub login_url: Option<String>,
}

/// Read and parse the YAML file at `path`.
pub fn load_probe_file(path: &Path) -> Result<ProbeFileConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ProbeError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_probe_file(&raw)
}

pub fn parse_probe_file(raw: &str) -> Result<ProbeFileConfig> {
    // An empty document deserializes to unit, not to a struct.
    if raw.trim().is_empty() {
        return Ok(ProbeFileConfig::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}
