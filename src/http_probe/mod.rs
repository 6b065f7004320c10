pub mod classify;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::classify::{classify_body, classify_status, find_signatures};
    pub use super::probe::probe_target;
    pub use super::result::{Classification, Verdict};
}

use std::fmt::Write;

/// Render an error and its whole source chain on one line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

fn error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "Timeout"
    } else if err.is_connect() {
        "ConnectionError"
    } else if err.is_builder() {
        "InvalidRequest"
    } else if err.is_redirect() {
        "TooManyRedirects"
    } else if err.is_body() || err.is_decode() {
        "BodyError"
    } else if err.is_request() {
        "RequestError"
    } else {
        "HttpError"
    }
}

/// Describe a transport failure as `EXCEPTION: <kind>: <message chain>`.
pub fn describe_transport_error(err: &reqwest::Error) -> String {
    format!("EXCEPTION: {}: {}", error_kind(err), report(err))
}
