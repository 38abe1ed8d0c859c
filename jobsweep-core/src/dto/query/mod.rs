//! FetchJobs query DTOs
//!
//! Request body and typed response envelope for the node's `/query`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::job::RawJob;

/// Operation name sent with the FetchJobs document
pub const FETCH_JOBS_OPERATION: &str = "FetchJobs";

/// Number of jobs requested per node; there is no follow-up page
pub const JOB_PAGE_LIMIT: u32 = 1000;

/// FetchJobs document, including the OCR spec fragment that selects addresses
pub const FETCH_JOBS_QUERY: &str = r#"fragment JobsPayload_ResultsFields on Job {
  id
  name
  externalJobID
  createdAt
  spec {
    __typename
    ... on OCRSpec {
      contractAddress
      keyBundleID
      transmitterAddress
      __typename
    }
  }
  __typename
}

query FetchJobs($offset: Int, $limit: Int) {
  jobs(offset: $offset, limit: $limit) {
    results {
      ...JobsPayload_ResultsFields
      __typename
    }
    metadata {
      total
      __typename
    }
    __typename
  }
}
"#;

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    pub operation_name: String,
    pub variables: V,
    pub query: String,
}

/// Pagination variables for FetchJobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVariables {
    pub offset: u32,
    pub limit: u32,
}

impl Default for PageVariables {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: JOB_PAGE_LIMIT,
        }
    }
}

/// The fixed FetchJobs request: first page, `JOB_PAGE_LIMIT` jobs
pub fn fetch_jobs_request() -> GraphQlRequest<PageVariables> {
    GraphQlRequest {
        operation_name: FETCH_JOBS_OPERATION.to_string(),
        variables: PageVariables::default(),
        query: FETCH_JOBS_QUERY.to_string(),
    }
}

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of a FetchJobs response
#[derive(Debug, Clone, Deserialize)]
pub struct FetchJobsData {
    pub jobs: JobsPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsPayload {
    pub results: Vec<RawJob>,
    pub metadata: Option<JobsMetadata>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JobsMetadata {
    pub total: u64,
}

impl JobsPayload {
    /// Jobs the node holds beyond the returned page, if it reported a total
    pub fn omitted(&self) -> u64 {
        self.metadata
            .map(|meta| meta.total.saturating_sub(self.results.len() as u64))
            .unwrap_or(0)
    }
}
