//! Jobsweep Runner
//!
//! Polls every node in the registry once and persists its jobs.
//!
//! Architecture:
//! - Configuration: paths, TLS trust and timeouts for a run
//! - Registry: loads the node list
//! - Repositories: HTTP communication with nodes (login, job query)
//! - Services: the sequential retrieval pipeline and the result writer
//! - Report: what the run achieved and what failed

pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod repository;
pub mod service;

use anyhow::{Context, Result};
use jobsweep_core::domain::node::NodeDescriptor;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::report::RunReport;
use crate::repository::{HttpNodeRepository, NodeRepository};
use crate::service::{ResultWriter, RetrievalService};

/// Runs one full pass: load registry, retrieve every node, write results
///
/// Only a registry that cannot be loaded (or an HTTP client that cannot be
/// built) is an error; node and file failures end up in the report.
pub async fn run(config: &Config) -> Result<RunReport> {
    let nodes = registry::load_nodes(&config.nodes_file)
        .await
        .context("Cannot start run")?;

    let repository = Arc::new(HttpNodeRepository::from_config(config)?);

    Ok(run_with(config, &nodes, repository).await)
}

/// Runs the pipeline over `nodes` using `repository` for node access
pub async fn run_with(
    config: &Config,
    nodes: &[NodeDescriptor],
    repository: Arc<dyn NodeRepository>,
) -> RunReport {
    let retrieval = RetrievalService::new(repository).retrieve_all(nodes).await;
    info!(
        "Retrieval finished: {} job(s) from {} node(s)",
        retrieval.store.total_jobs(),
        retrieval.store.len()
    );

    let written = ResultWriter::new(&config.output_dir)
        .write_all(&retrieval.store)
        .await;

    RunReport {
        nodes_attempted: nodes.len(),
        jobs_per_node: retrieval
            .store
            .iter()
            .map(|(name, jobs)| (name.to_string(), jobs.len()))
            .collect(),
        node_failures: retrieval.failures,
        files_written: written.written,
        write_failures: written.failures,
    }
}
