//! Jobsweep node client
//!
//! Talks to one node's operator API: `POST /sessions` trades credentials for
//! a session cookie, `POST /query` runs the FetchJobs GraphQL document with
//! that cookie attached.
//!
//! # Example
//!
//! ```no_run
//! use jobsweep_client::NodeClient;
//! use reqwest::Client;
//!
//! #[tokio::main]
//! async fn main() -> jobsweep_client::Result<()> {
//!     let http = Client::builder().danger_accept_invalid_certs(true).build()?;
//!     let client = NodeClient::with_client("https://node-1.internal:6689", http);
//!
//!     let session = client.login("ops@example.com", "secret").await?;
//!     let jobs = client.fetch_jobs(&session).await?;
//!
//!     println!("Fetched {} jobs", jobs.results.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod session;

pub use error::{ClientError, Result};
pub use jobsweep_core::dto::query::JobsPayload;
pub use session::SessionToken;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for one node
///
/// The `reqwest::Client` is shared across nodes; only the base URL differs.
#[derive(Debug, Clone)]
pub struct NodeClient {
    /// Scheme, host and port, without a trailing slash
    base_url: String,
    client: Client,
}

impl NodeClient {
    /// Wraps a configured `reqwest::Client` for the node at `base_url`
    ///
    /// TLS verification and timeouts are whatever `client` was built with.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and decode the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check_status(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Turn a non-success status into an API error carrying the body
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}
