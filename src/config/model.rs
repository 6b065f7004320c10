use std::fmt;

use url::Url;

/// Literal substrings that betray a server-side rendering error in an
/// otherwise successful response.
pub const DEFAULT_SIGNATURES: &[&str] = &[
    "Warning:",
    "<b>Warning</b>",
    "Fatal error",
    "Parse error",
    "Uncaught Exception",
    "Uncaught Error",
];

/// The credential pair posted to the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Login settings. Present only when the run authenticates before probing.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    pub login_url: Url,
    pub credentials: Credentials,
}

/// Controls how response bodies are inspected for error signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPolicy {
    /// Signatures searched for, case-sensitive, in the order listed.
    pub signatures: Vec<String>,

    /// Only the first `n` bytes of the body are inspected when set.
    pub scan_limit: Option<usize>,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self {
            signatures: DEFAULT_SIGNATURES.iter().map(|s| s.to_string()).collect(),
            scan_limit: None,
        }
    }
}
