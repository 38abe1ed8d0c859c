//! Jobsweep
//!
//! Logs in to every configured node, fetches its jobs and writes one full job
//! list plus one contract address list per node.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

use jobsweep_runner::config::{Config, DEFAULT_LOG_FILE, DEFAULT_NODES_FILE, DEFAULT_OUTPUT_DIR};
use jobsweep_runner::logging;

#[derive(Parser)]
#[command(name = "jobsweep")]
#[command(about = "Retrieve job lists and contract addresses from nodes", long_about = None)]
struct Cli {
    /// Node registry (JSON array of {name, url, username, password})
    #[arg(long, env = "JOBSWEEP_NODES_FILE", default_value = DEFAULT_NODES_FILE)]
    nodes_file: PathBuf,

    /// Directory for <node>.json and <node>_addresses.json
    #[arg(long, env = "JOBSWEEP_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log file, appended to alongside console output
    #[arg(long, env = "JOBSWEEP_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Verify node TLS certificates (accepted unchecked by default)
    #[arg(long, env = "JOBSWEEP_VERIFY_TLS")]
    verify_tls: bool,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long, env = "JOBSWEEP_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.nodes_file, self.output_dir, self.log_file);
        if self.verify_tls {
            config = config.with_verified_tls();
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    config.validate()?;

    logging::init(&config.log_file)?;

    info!("Starting jobsweep");
    if config.accept_invalid_certs {
        info!("TLS certificate verification is disabled for node connections");
    }

    match jobsweep_runner::run(&config).await {
        Ok(report) => {
            report.log_summary();
            Ok(())
        }
        Err(e) => {
            error!("Error in main function: {:#}", e);
            Err(e)
        }
    }
}
