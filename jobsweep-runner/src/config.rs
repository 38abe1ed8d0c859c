//! Runner configuration
//!
//! Paths, transport trust settings and timeouts for a run. The defaults
//! reproduce the fixed layout the tool has always used: `./nodes.json` in,
//! `./contracts/` out, `./chainlink-job-retriever.log` for the log.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_NODES_FILE: &str = "./nodes.json";
pub const DEFAULT_OUTPUT_DIR: &str = "./contracts";
pub const DEFAULT_LOG_FILE: &str = "./chainlink-job-retriever.log";

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the node registry
    pub nodes_file: PathBuf,

    /// Directory the per-node result files are written to
    pub output_dir: PathBuf,

    /// File the log is appended to, in addition to the console
    pub log_file: PathBuf,

    /// Accept self-signed or otherwise invalid TLS certificates
    ///
    /// Nodes are typically internal hosts with self-signed certificates, so
    /// this defaults to `true`.
    pub accept_invalid_certs: bool,

    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration with the given paths and default transport settings
    pub fn new(
        nodes_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            nodes_file: nodes_file.into(),
            output_dir: output_dir.into(),
            log_file: log_file.into(),
            accept_invalid_certs: true,
            request_timeout: None,
        }
    }

    /// Enforces TLS certificate verification
    pub fn with_verified_tls(mut self) -> Self {
        self.accept_invalid_certs = false;
        self
    }

    /// Bounds every request by `timeout`
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.nodes_file.as_os_str().is_empty() {
            anyhow::bail!("nodes_file cannot be empty");
        }

        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!("output_dir cannot be empty");
        }

        if self.log_file.as_os_str().is_empty() {
            anyhow::bail!("log_file cannot be empty");
        }

        if matches!(self.request_timeout, Some(timeout) if timeout.is_zero()) {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_NODES_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_LOG_FILE)
    }
}
