use std::time::Instant;

use tracing::debug;

use super::describe_transport_error;
use super::prelude::*;
use crate::config::ContentPolicy;
use crate::session::Session;

/// Probe one target through the session and classify the outcome.
/// Never fails: transport errors become critical verdicts.
pub async fn probe_target(session: &Session, url: &str, policy: &ContentPolicy) -> Verdict {
    let start = Instant::now();
    let response = match session.client().get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("Request to {url} failed after {:?}: {e}", start.elapsed());
            return Verdict::new(
                url,
                Classification::Critical,
                describe_transport_error(&e),
                None,
            );
        }
    };

    let status = response.status().as_u16();
    if let Some((classification, reason)) = classify_status(status) {
        debug!("{url} answered {status} in {:?}", start.elapsed());
        return Verdict::new(url, classification, reason, Some(status));
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return Verdict::new(
                url,
                Classification::Critical,
                describe_transport_error(&e),
                Some(status),
            );
        }
    };
    debug!(
        "{url} answered {status} with {} bytes in {:?}",
        body.len(),
        start.elapsed()
    );

    let (classification, reason) = classify_body(status, &body, policy);
    Verdict::new(url, classification, reason, Some(status))
}
