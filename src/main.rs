mod config;

use std::fs::File;
use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use ninedays_feed::FeedClient;
use ninedays_ui::{request_fetch, AppState};

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing()?;

    tracing::info!("ninedays starting");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let client = FeedClient::with_endpoint(config.endpoint_url())?;

    let (tx, rx) = mpsc::channel();
    request_fetch(&tx, client, runtime.handle());

    ninedays_ui::tui::run(AppState::new(), rx)?;

    tracing::info!("ninedays exiting");
    Ok(())
}

/// The terminal belongs to the TUI, so logs go to a file under the config
/// directory. `RUST_LOG` filters as usual.
fn init_tracing() -> Result<()> {
    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let log_file = File::create(dir.join("ninedays.log"))
        .with_context(|| "failed to create log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
