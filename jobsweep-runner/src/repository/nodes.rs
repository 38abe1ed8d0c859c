//! Nodes repository
//!
//! Wraps a shared `reqwest::Client` and builds a [`NodeClient`] per node.

use anyhow::Context;
use async_trait::async_trait;
use jobsweep_client::{JobsPayload, NodeClient, Result, SessionToken};
use jobsweep_core::domain::node::NodeDescriptor;
use reqwest::Client;

use crate::config::Config;

/// Repository trait for node operations
#[async_trait]
pub trait NodeRepository: Send + Sync {
    /// Logs in to `node` with its registry credentials
    async fn authenticate(&self, node: &NodeDescriptor) -> Result<SessionToken>;

    /// Runs the job query on `node` with a session from [`Self::authenticate`]
    async fn fetch_jobs(&self, node: &NodeDescriptor, session: &SessionToken)
    -> Result<JobsPayload>;
}

/// HTTP implementation of NodeRepository
pub struct HttpNodeRepository {
    client: Client,
}

impl HttpNodeRepository {
    /// Creates a repository around an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the shared HTTP client from the run configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::new(client))
    }

    fn client_for(&self, node: &NodeDescriptor) -> NodeClient {
        NodeClient::with_client(node.url.clone(), self.client.clone())
    }
}

#[async_trait]
impl NodeRepository for HttpNodeRepository {
    async fn authenticate(&self, node: &NodeDescriptor) -> Result<SessionToken> {
        self.client_for(node)
            .login(&node.username, &node.password)
            .await
    }

    async fn fetch_jobs(
        &self,
        node: &NodeDescriptor,
        session: &SessionToken,
    ) -> Result<JobsPayload> {
        self.client_for(node).fetch_jobs(session).await
    }
}
