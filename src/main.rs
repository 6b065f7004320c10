use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use panelwatch::config::{load_config, load_dotenv};
use panelwatch::runner::run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv = load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(report) => ExitCode::from(report.outcome().exit_code()),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
