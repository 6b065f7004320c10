//! The cookie-holding HTTP client shared by login and every probe of a run.

pub mod auth;

use reqwest::Client;
use tracing::info;

use crate::config::{AppConfig, LoginConfig};
use crate::error::{ProbeError, Result};

pub use auth::login_succeeded;

pub struct Session {
    client: Client,
    authenticated: bool,
}

impl Session {
    /// Build an anonymous session. Cookies set by any response are kept for later requests.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            authenticated: false,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Log in with the configured credentials.
    /// On failure the error carries the reason reported in the summary.
    pub async fn login(&mut self, login: &LoginConfig) -> Result<()> {
        info!(
            "Logging in to {} as {}",
            login.login_url, login.credentials.email
        );
        auth::submit_login(&self.client, login)
            .await
            .map_err(ProbeError::Authentication)?;
        self.authenticated = true;
        Ok(())
    }
}
