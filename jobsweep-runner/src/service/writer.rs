//! Result writer
//!
//! Persists a job store as two JSON files per node. Every write is awaited
//! and stands alone: a failure is recorded and the next file is attempted.
//!
//! Node names become file stems, so a name that could resolve outside the
//! output directory is refused and reported instead of written.

use jobsweep_core::domain::store::JobStore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::error::WriteError;

/// Files written and failures collected by one [`ResultWriter::write_all`]
#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WriteError>,
}

/// Writes `<node>.json` and `<node>_addresses.json` under one directory
#[derive(Debug, Clone)]
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the full job list for `node`
    pub fn jobs_path(&self, node: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", node))
    }

    /// Path of the contract address list for `node`
    pub fn addresses_path(&self, node: &str) -> PathBuf {
        self.output_dir.join(format!("{}_addresses.json", node))
    }

    /// Writes both files for every node in the store, in store order
    pub async fn write_all(&self, store: &JobStore) -> WriteOutcome {
        let mut outcome = WriteOutcome::default();

        if let Err(e) = tokio::fs::create_dir_all(&self.output_dir).await {
            warn!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            );
        }

        for (node, jobs) in store.iter() {
            info!("Retrieved jobs for {}: {}", node, jobs.len());

            if !is_plain_file_stem(node) {
                let e = WriteError::UnsafeName {
                    node: node.to_string(),
                };
                error!("{}", e);
                outcome.failures.push(e);
                continue;
            }

            info!("Writing retrieved job data to file.");
            self.record(&mut outcome, self.jobs_path(node), jobs).await;

            let addresses = store.addresses(node).unwrap_or_default();
            info!("Writing retrieved job addresses to file.");
            self.record(&mut outcome, self.addresses_path(node), &addresses)
                .await;
        }

        outcome
    }

    async fn record<T: Serialize + ?Sized>(
        &self,
        outcome: &mut WriteOutcome,
        path: PathBuf,
        value: &T,
    ) {
        match write_json(&path, value).await {
            Ok(()) => {
                info!("Successfully wrote {}", path.display());
                outcome.written.push(path);
            }
            Err(e) => {
                error!("Error writing {}: {}", path.display(), e);
                outcome.failures.push(e);
            }
        }
    }
}

/// True when `node` names a single entry directly under the output directory
fn is_plain_file_stem(node: &str) -> bool {
    !node.is_empty() && node != "." && node != ".." && !node.contains(['/', '\\', '\0'])
}

/// Pretty-prints `value` (2-space indent) into `path`
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), WriteError> {
    let body = serde_json::to_string_pretty(value).map_err(|source| WriteError::Serialize {
        path: path.display().to_string(),
        source,
    })?;

    tokio::fs::write(path, body)
        .await
        .map_err(|source| WriteError::Io {
            path: path.display().to_string(),
            source,
        })
}
