//! Retrieval service
//!
//! Processes nodes strictly one after another. A node's entry in the store
//! is created before it is contacted, so a node that fails still shows up
//! downstream with no jobs.

use jobsweep_core::domain::node::NodeDescriptor;
use jobsweep_core::domain::store::JobStore;
use jobsweep_core::dto::query::JOB_PAGE_LIMIT;
use jobsweep_core::normalize_job;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::RetrieveError;
use crate::repository::NodeRepository;

/// Everything a pass over the registry produced
#[derive(Debug, Default)]
pub struct Retrieval {
    pub store: JobStore,
    pub failures: Vec<RetrieveError>,
}

/// Sequential authenticate → fetch → normalize → accumulate pipeline
pub struct RetrievalService {
    repository: Arc<dyn NodeRepository>,
}

impl RetrievalService {
    pub fn new(repository: Arc<dyn NodeRepository>) -> Self {
        Self { repository }
    }

    /// Runs every node once, in registry order
    ///
    /// Node failures are logged and collected; they never stop the pass.
    pub async fn retrieve_all(&self, nodes: &[NodeDescriptor]) -> Retrieval {
        let mut retrieval = Retrieval::default();

        for node in nodes {
            info!("Retrieving jobs for {}.", node.name);
            retrieval.store.register_node(&node.name);

            match self.retrieve_node(node, &mut retrieval.store).await {
                Ok(count) => debug!("Stored {} job(s) for {}", count, node.name),
                Err(e) => {
                    error!("Error retrieving jobs for {}: {}", node.name, e);
                    if e.credentials_rejected() {
                        warn!("Check the username and password registered for {}.", node.name);
                    }
                    retrieval.failures.push(e);
                }
            }
        }

        retrieval
    }

    /// Retrieves one node's jobs into `store`, returning how many were added
    async fn retrieve_node(
        &self,
        node: &NodeDescriptor,
        store: &mut JobStore,
    ) -> Result<usize, RetrieveError> {
        let session = self
            .repository
            .authenticate(node)
            .await
            .map_err(|source| RetrieveError::Auth {
                node: node.name.clone(),
                source,
            })?;

        let page = self
            .repository
            .fetch_jobs(node, &session)
            .await
            .map_err(|source| RetrieveError::Fetch {
                node: node.name.clone(),
                source,
            })?;

        let omitted = page.omitted();
        if omitted > 0 {
            warn!(
                "{} holds {} more job(s) than the {} fetched; they are not included",
                node.name, omitted, JOB_PAGE_LIMIT
            );
        }

        let count = page.results.len();
        store.extend(&node.name, page.results.into_iter().map(normalize_job));

        Ok(count)
    }
}
