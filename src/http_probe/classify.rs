//! Response classification.
//!
//! Status handling and body inspection are kept apart so the body is only
//! read when the status alone does not settle the verdict. The body check is
//! a plain substring search: a page that legitimately mentions a signature is
//! reported exactly like a broken one.

use crate::config::ContentPolicy;

use super::result::Classification;

const TOO_MANY_REQUESTS: u16 = 429;

/// Classify by status alone. `None` means the body has to be inspected.
pub fn classify_status(status: u16) -> Option<(Classification, String)> {
    match status {
        // The probe itself can trip the server's rate limiting, so the server is up.
        TOO_MANY_REQUESTS => Some((
            Classification::Warning,
            format!("WARNING HTTP {status} (rate limited)"),
        )),
        s if s >= 400 => Some((Classification::Critical, format!("ERROR HTTP {status}"))),
        _ => None,
    }
}

/// Classify a response with a non-error status by its body.
pub fn classify_body(status: u16, body: &str, policy: &ContentPolicy) -> (Classification, String) {
    let matched = find_signatures(body, policy);
    if matched.is_empty() {
        (Classification::Ok, format!("OK {status}"))
    } else {
        (
            Classification::Critical,
            format!("ERROR CONTENT HTTP {status}: {}", matched.join(", ")),
        )
    }
}

/// The configured signatures present in the inspected part of `body`, in configured order.
pub fn find_signatures<'a>(body: &str, policy: &'a ContentPolicy) -> Vec<&'a str> {
    let window = scan_window(body, policy.scan_limit);
    policy
        .signatures
        .iter()
        .map(String::as_str)
        .filter(|signature| window.contains(signature))
        .collect()
}

fn scan_window(body: &str, limit: Option<usize>) -> &str {
    match limit {
        Some(limit) if limit < body.len() => {
            let mut end = limit;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            &body[..end]
        }
        _ => body,
    }
}
