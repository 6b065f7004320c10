//! Sequencing of one run: load targets, log in, probe, aggregate, report.

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::error::{ProbeError, Result};
use crate::http_probe::prelude::*;
use crate::session::Session;
use crate::summary::{RunSummary, write_summary};
use crate::targets::load_targets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Pass,
    Fail,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Pass => 0,
            RunOutcome::Fail => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// One verdict per probed target, in probe order. Empty when the login failed.
    pub verdicts: Vec<Verdict>,
    pub summary: RunSummary,
    /// Whether the summary file was written.
    pub summary_written: bool,
}

impl RunReport {
    pub fn outcome(&self) -> RunOutcome {
        if self.summary.passed() {
            RunOutcome::Pass
        } else {
            RunOutcome::Fail
        }
    }
}

/// Execute one run.
///
/// `Err` is returned only for pre-flight configuration problems, before any
/// network traffic. A failed login is a completed run with a failing report.
pub async fn run(config: &AppConfig) -> Result<RunReport> {
    let targets = load_targets(&config.urls_file)?;
    if targets.is_empty() {
        return Err(ProbeError::Config(format!(
            "No URLs found in {}",
            config.urls_file.display()
        )));
    }
    info!(
        "Loaded {} target(s) from {}",
        targets.len(),
        config.urls_file.display()
    );

    let mut session = Session::new(config)?;

    if let Some(login) = &config.login {
        match session.login(login).await {
            Ok(()) => println!("Login OK ({})", login.login_url),
            Err(ProbeError::Authentication(reason)) => {
                println!("Login FAILED ({}): {reason}", login.login_url);
                error!("Login failed, skipping all {} target(s)", targets.len());
                return finish(config, Vec::new(), RunSummary::login_failed(reason));
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        authenticated = session.is_authenticated(),
        "Probing {} target(s)",
        targets.len()
    );
    println!("=== WEB MONITORING RESULTS ===");
    let verdicts = probe_all(&session, &targets, config).await;

    let summary = RunSummary::from_verdicts(&verdicts);
    finish(config, verdicts, summary)
}

async fn probe_all(session: &Session, targets: &[String], config: &AppConfig) -> Vec<Verdict> {
    let mut verdicts = Vec::with_capacity(targets.len());

    for (index, target) in targets.iter().enumerate() {
        if index > 0 && !config.request_delay.is_zero() {
            sleep(config.request_delay).await;
        }

        let verdict = probe_target(session, target, &config.content_policy).await;
        println!("{}", verdict.line());
        debug!(classification = %verdict.classification, "Probed {}", verdict.url);
        verdicts.push(verdict);
    }

    verdicts
}

fn finish(config: &AppConfig, verdicts: Vec<Verdict>, summary: RunSummary) -> Result<RunReport> {
    let summary_written = write_summary(&config.summary_file, &summary)?;

    let ok = verdicts
        .iter()
        .filter(|v| v.classification == Classification::Ok)
        .count();
    info!(
        probed = verdicts.len(),
        ok,
        warnings = summary.warnings.len(),
        critical = summary.critical.len(),
        "Run finished"
    );
    if summary_written {
        info!("Summary written to {}", config.summary_file.display());
    }
    if !summary.warnings.is_empty() && summary.passed() {
        warn!("Run passed with {} warning(s)", summary.warnings.len());
    }

    Ok(RunReport {
        verdicts,
        summary,
        summary_written,
    })
}
