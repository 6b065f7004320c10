//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use panelwatch::config::{AppConfig, Credentials, LoginConfig};
use tempfile::TempDir;

pub const TEST_USER_AGENT: &str = "panelwatch-test/1.0";

/// A temporary workspace holding the URL list and the summary path of one run.
pub struct Workspace {
    pub dir: TempDir,
    pub urls_file: PathBuf,
    pub summary_file: PathBuf,
}

impl Workspace {
    pub fn new(urls: &[String]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let urls_file = dir.path().join("urls_to_check.txt");
        let summary_file = dir.path().join("monitoring_result.txt");
        let mut content = String::from("# targets under test\n\n");
        for url in urls {
            content.push_str(url);
            content.push('\n');
        }
        std::fs::write(&urls_file, content).expect("Failed to write URL list");
        Self {
            dir,
            urls_file,
            summary_file,
        }
    }

    /// An anonymous configuration without pacing so tests stay fast.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::new(&self.urls_file, &self.summary_file);
        config.request_delay = Duration::ZERO;
        config.user_agent = TEST_USER_AGENT.to_string();
        config
    }

    pub fn config_with_login(&self, login_url: &str) -> AppConfig {
        let mut config = self.config();
        config.login = Some(LoginConfig {
            login_url: login_url.parse().expect("Invalid login URL"),
            credentials: Credentials::new("ops@example.com", "s3cret"),
        });
        config
    }

    pub fn summary(&self) -> Option<String> {
        std::fs::read_to_string(&self.summary_file).ok()
    }
}
