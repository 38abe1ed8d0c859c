//! Run report
//!
//! Summary of one run: what was retrieved, what was written and every
//! failure on the way. Failures are reported through the log; the process
//! still exits successfully.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::{RetrieveError, WriteError};

#[derive(Debug, Default)]
pub struct RunReport {
    /// Nodes listed in the registry
    pub nodes_attempted: usize,
    /// Jobs stored per node, in store order
    pub jobs_per_node: Vec<(String, usize)>,
    pub node_failures: Vec<RetrieveError>,
    pub files_written: Vec<PathBuf>,
    pub write_failures: Vec<WriteError>,
}

impl RunReport {
    /// True when every node was retrieved and every file written
    pub fn is_clean(&self) -> bool {
        self.node_failures.is_empty() && self.write_failures.is_empty()
    }

    pub fn total_jobs(&self) -> usize {
        self.jobs_per_node.iter().map(|(_, count)| count).sum()
    }

    /// Jobs stored for `node`, if it has an entry
    pub fn jobs_for(&self, node: &str) -> Option<usize> {
        self.jobs_per_node
            .iter()
            .find(|(name, _)| name == node)
            .map(|(_, count)| *count)
    }

    pub fn log_summary(&self) {
        if self.is_clean() {
            info!(
                "Run complete: {} node(s), {} job(s), {} file(s) written",
                self.nodes_attempted,
                self.total_jobs(),
                self.files_written.len()
            );
            return;
        }

        warn!(
            "Run complete with failures: {}/{} node(s) failed, {} write failure(s), {} job(s) retrieved",
            self.node_failures.len(),
            self.nodes_attempted,
            self.write_failures.len(),
            self.total_jobs()
        );
        for failure in &self.node_failures {
            warn!("  - {}", failure);
        }
        for failure in &self.write_failures {
            warn!("  - {}", failure);
        }
    }
}
