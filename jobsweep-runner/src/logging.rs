//! Logging setup
//!
//! Every line goes to the console and is appended to the configured log
//! file. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "jobsweep=info,jobsweep_runner=info,jobsweep_client=info";

/// Installs the global subscriber
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    subscriber(filter, file)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Console layer plus a plain-text layer appending to `file`
fn subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
}
