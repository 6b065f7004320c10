//! panelwatch - scheduled synthetic monitoring for a private web panel.
//!
//! Logs in (optionally), probes a list of URLs one at a time, classifies each
//! response and leaves a summary file plus an exit code for the scheduler.

pub mod config;
pub mod error;
pub mod http_probe;
pub mod runner;
pub mod session;
pub mod summary;
pub mod targets;
