use reqwest::Client;
use tracing::debug;

use crate::config::LoginConfig;
use crate::http_probe::describe_transport_error;

/// Lowercase markers whose presence in the login response means the login failed.
pub const LOGIN_FAILURE_MARKERS: &[&str] = &["incorrecto", "error"];

pub const LOGIN_REJECTED: &str = "credentials incorrect/login failed";

/// Decide whether a login response is a success.
///
/// Success is status 200 with none of [`LOGIN_FAILURE_MARKERS`] in the body,
/// ignoring case. No positive success token is required, so a panel page
/// that mentions "error" anywhere reads as a failed login.
pub fn login_succeeded(status: u16, body: &str) -> bool {
    if status != 200 {
        return false;
    }
    let body = body.to_lowercase();
    !LOGIN_FAILURE_MARKERS
        .iter()
        .any(|marker| body.contains(marker))
}

/// POST the credentials as a form. `Err` holds the failure reason.
pub(crate) async fn submit_login(client: &Client, login: &LoginConfig) -> Result<(), String> {
    let form = [
        ("email", login.credentials.email.as_str()),
        ("password", login.credentials.password.as_str()),
    ];

    let response = client
        .post(login.login_url.clone())
        .form(&form)
        .send()
        .await
        .map_err(|e| describe_transport_error(&e))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| describe_transport_error(&e))?;
    debug!("Login answered {status} with {} bytes", body.len());

    if login_succeeded(status, &body) {
        Ok(())
    } else if status != 200 {
        Err(format!("HTTP {status}"))
    } else {
        Err(LOGIN_REJECTED.to_string())
    }
}
