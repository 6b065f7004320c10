//! Aggregation of verdicts into the run summary and its on-disk artifact.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::http_probe::result::Verdict;

pub const CRITICAL_HEADING: &str = "CRITICAL ERRORS detected in the following URLs:";
pub const WARNING_HEADING: &str = "WARNINGS (not counted as failures):";
pub const LOGIN_HEADING: &str = "LOGIN FAILED, no URL was checked:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Critical verdicts, in probe order.
    pub critical: Vec<Verdict>,
    /// Warning verdicts, in probe order.
    pub warnings: Vec<Verdict>,
    pub login_failure: Option<String>,
}

impl RunSummary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        Self {
            critical: verdicts.iter().filter(|v| v.is_critical()).cloned().collect(),
            warnings: verdicts.iter().filter(|v| v.is_warning()).cloned().collect(),
            login_failure: None,
        }
    }

    pub fn login_failed(reason: impl Into<String>) -> Self {
        Self {
            login_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.critical.is_empty() && self.login_failure.is_none()
    }

    /// `None` when there is nothing to report.
    pub fn render(&self) -> Option<String> {
        if let Some(reason) = &self.login_failure {
            return Some(format!("{LOGIN_HEADING}\n\n{reason}\n"));
        }

        let mut sections = Vec::new();
        if !self.critical.is_empty() {
            sections.push(render_section(CRITICAL_HEADING, &self.critical));
        }
        if !self.warnings.is_empty() {
            sections.push(render_section(WARNING_HEADING, &self.warnings));
        }

        if sections.is_empty() {
            None
        } else {
            Some(sections.join("\n"))
        }
    }
}

fn render_section(heading: &str, verdicts: &[Verdict]) -> String {
    let lines: Vec<String> = verdicts.iter().map(Verdict::line).collect();
    format!("{heading}\n\n{}\n", lines.join("\n"))
}

/// Write the rendered summary to `path`, or remove a stale one when there is
/// nothing to report. Returns whether a file was written.
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<bool> {
    match summary.render() {
        Some(content) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            Ok(true)
        }
        None => match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!("Removed stale summary {}", path.display());
                Ok(false)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            // A leftover file must not turn a healthy run into a failure.
            Err(e) => {
                tracing::warn!("Cannot remove stale summary {}: {e}", path.display());
                Ok(false)
            }
        },
    }
}
