use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::model::{ContentPolicy, Credentials, LoginConfig};
use super::probe_config::{ProbeFileConfig, load_probe_file};
use crate::error::{ProbeError, Result};

pub const URLS_FILE_VAR: &str = "URLS_FILE";
pub const REQUEST_DELAY_VAR: &str = "REQUEST_DELAY_SECONDS";
pub const LOGIN_URL_VAR: &str = "LOGIN_URL";
pub const LOGIN_EMAIL_VAR: &str = "LOGIN_EMAIL";
pub const LOGIN_PASSWORD_VAR: &str = "LOGIN_PASSWORD";
pub const SUMMARY_FILE_VAR: &str = "SUMMARY_FILE";
pub const PROBE_CONFIG_FILE_VAR: &str = "PROBE_CONFIG_FILE";

pub const DEFAULT_URLS_FILE: &str = "monitoring/urls_to_check.txt";
pub const DEFAULT_SUMMARY_FILE: &str = "monitoring_result.txt";
pub const DEFAULT_REQUEST_DELAY_SECONDS: f64 = 1.0;

/// Per-request timeout for the login POST and every probe GET.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn default_user_agent() -> String {
    format!("panelwatch/{}", env!("CARGO_PKG_VERSION"))
}

/// Everything a run needs, resolved once at start-up and passed by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub urls_file: PathBuf,
    pub summary_file: PathBuf,
    pub request_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub login: Option<LoginConfig>,
    pub content_policy: ContentPolicy,
}

impl AppConfig {
    /// An anonymous configuration with the built-in defaults.
    pub fn new(urls_file: impl Into<PathBuf>, summary_file: impl Into<PathBuf>) -> Self {
        Self {
            urls_file: urls_file.into(),
            summary_file: summary_file.into(),
            request_delay: Duration::from_secs_f64(DEFAULT_REQUEST_DELAY_SECONDS),
            request_timeout: REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
            login: None,
            content_policy: ContentPolicy::default(),
        }
    }

    /// Build the configuration from a variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let file = match var(PROBE_CONFIG_FILE_VAR) {
            Some(path) => {
                tracing::info!("Using probe config file: {path}");
                load_probe_file(Path::new(&path))?
            }
            None => ProbeFileConfig::default(),
        };

        let urls_file = var(URLS_FILE_VAR).unwrap_or_else(|| DEFAULT_URLS_FILE.to_string());
        let summary_file =
            var(SUMMARY_FILE_VAR).unwrap_or_else(|| DEFAULT_SUMMARY_FILE.to_string());

        let mut config = AppConfig::new(urls_file, summary_file);

        if let Some(raw) = var(REQUEST_DELAY_VAR) {
            config.request_delay = parse_delay(&raw)?;
        }

        if let Some(user_agent) = file.user_agent {
            config.user_agent = user_agent;
        }

        config.content_policy = content_policy(file.signatures, file.signature_scan_limit)?;

        let login_url = var(LOGIN_URL_VAR).or(file.login_url);
        let email = var(LOGIN_EMAIL_VAR);
        let password = var(LOGIN_PASSWORD_VAR);

        config.login = match login_url {
            Some(raw_url) => Some(login_config(&raw_url, email, password)?),
            None => {
                if email.is_some() || password.is_some() {
                    tracing::warn!(
                        "Login credentials are set but {LOGIN_URL_VAR} is not; probing anonymously"
                    );
                }
                None
            }
        };

        Ok(config)
    }
}

/// Load the application configuration from the process environment.
/// Call [`load_dotenv`] beforehand so `.env` values are visible.
pub fn load_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

/// Read `.env` into the process environment when present, so local runs
/// mirror the scheduled job. Must run before logging is set up for
/// `RUST_LOG` in `.env` to take effect.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Like [`load_dotenv`] for an explicit file. Variables already set win.
pub fn load_dotenv_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Parse the delay between requests, in (fractional) seconds.
pub fn parse_delay(raw: &str) -> Result<Duration> {
    let seconds: f64 = raw.trim().parse().map_err(|_| {
        ProbeError::Config(format!("{REQUEST_DELAY_VAR} is not a number: {raw:?}"))
    })?;
    Duration::try_from_secs_f64(seconds).map_err(|_| {
        ProbeError::Config(format!(
            "{REQUEST_DELAY_VAR} must be a finite, non-negative number of seconds, got {raw:?}"
        ))
    })
}

fn content_policy(signatures: Option<Vec<String>>, scan_limit: Option<usize>) -> Result<ContentPolicy> {
    let mut policy = ContentPolicy::default();

    if let Some(signatures) = signatures {
        let signatures: Vec<String> = signatures
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if signatures.is_empty() {
            tracing::warn!("Signature list is empty; response bodies will not be inspected");
        }
        policy.signatures = signatures;
    }

    if scan_limit == Some(0) {
        return Err(ProbeError::Config(
            "signature_scan_limit must be greater than zero".to_string(),
        ));
    }
    policy.scan_limit = scan_limit;

    Ok(policy)
}

fn login_config(
    raw_url: &str,
    email: Option<String>,
    password: Option<String>,
) -> Result<LoginConfig> {
    let login_url = Url::parse(raw_url)
        .map_err(|e| ProbeError::Config(format!("Invalid login URL {raw_url:?}: {e}")))?;

    let missing: Vec<&str> = [
        (LOGIN_EMAIL_VAR, email.is_none()),
        (LOGIN_PASSWORD_VAR, password.is_none()),
    ]
    .iter()
    .filter(|(_, missing)| *missing)
    .map(|(name, _)| *name)
    .collect();

    match (email, password) {
        (Some(email), Some(password)) => Ok(LoginConfig {
            login_url,
            credentials: Credentials::new(email, password),
        }),
        _ => Err(ProbeError::Config(format!(
            "Login is enabled but {} not set",
            missing.join(" and ")
        ))),
    }
}
