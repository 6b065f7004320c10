use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Ok,
    /// The server answered but the answer deserves a look; never fails a run.
    Warning,
    Critical,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Ok => "OK",
            Classification::Warning => "WARNING",
            Classification::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// Outcome of probing one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub url: String,
    pub classification: Classification,
    pub reason: String,
    /// `None` when no response was received.
    pub http_status: Option<u16>,
}

impl Verdict {
    pub fn new(
        url: impl Into<String>,
        classification: Classification,
        reason: impl Into<String>,
        http_status: Option<u16>,
    ) -> Self {
        Self {
            url: url.into(),
            classification,
            reason: reason.into(),
            http_status,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.classification == Classification::Critical
    }

    pub fn is_warning(&self) -> bool {
        self.classification == Classification::Warning
    }

    /// The `<url> --> <reason>` line used on the console and in the summary.
    pub fn line(&self) -> String {
        format!("{} --> {}", self.url, self.reason)
    }
}
