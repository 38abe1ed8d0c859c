//! Job query endpoint

use jobsweep_core::dto::query::{FetchJobsData, GraphQlResponse, JobsPayload, fetch_jobs_request};
use reqwest::header::COOKIE;
use tracing::{debug, warn};

use crate::NodeClient;
use crate::error::{ClientError, Result};
use crate::session::SessionToken;

impl NodeClient {
    // =============================================================================
    // Job Query
    // =============================================================================

    /// Run the FetchJobs query for the first page of jobs
    ///
    /// # Arguments
    /// * `session` - Token from [`NodeClient::login`] on this node
    ///
    /// # Returns
    /// The page of jobs plus the node's reported total, if any
    pub async fn fetch_jobs(&self, session: &SessionToken) -> Result<JobsPayload> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(COOKIE, session.cookie_header())
            .json(&fetch_jobs_request())
            .send()
            .await?;

        let body: GraphQlResponse<FetchJobsData> = self.handle_response(response).await?;
        let jobs = extract_jobs(body)?;

        debug!(url = %url, count = jobs.results.len(), "Fetched jobs");
        Ok(jobs)
    }
}

/// Pull `data.jobs` out of the envelope
fn extract_jobs(body: GraphQlResponse<FetchJobsData>) -> Result<JobsPayload> {
    let messages: Vec<String> = body
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    match body.data {
        Some(data) => {
            if !messages.is_empty() {
                warn!("Query returned partial errors: {}", messages.join("; "));
            }
            Ok(data.jobs)
        }
        None if !messages.is_empty() => Err(ClientError::GraphQl(messages.join("; "))),
        None => Err(ClientError::ParseError(
            "response carried neither data nor errors".to_string(),
        )),
    }
}
