//! Job domain types

use serde::{Deserialize, Serialize};

/// Job record as returned by a node's FetchJobs query
///
/// `created_at` is kept as the node rendered it; it is copied to the output
/// verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    pub id: String,
    pub name: String,
    #[serde(rename = "externalJobID")]
    pub external_job_id: String,
    pub created_at: String,
    pub spec: JobSpec,
}

/// Job specification union
///
/// Only `OCRSpec` selects the address fields in the query; every other
/// variant arrives with just its `__typename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    #[serde(rename = "__typename")]
    pub typename: String,
    #[serde(rename = "contractAddress", default)]
    pub contract_address: Option<String>,
    #[serde(rename = "keyBundleID", default)]
    pub key_bundle_id: Option<String>,
    #[serde(rename = "transmitterAddress", default)]
    pub transmitter_address: Option<String>,
}

/// Result row written to the per-node output files
///
/// Field order and names are the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedJob {
    pub name: String,
    pub contract: Option<String>,
    #[serde(rename = "externalJobID")]
    pub external_job_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "type")]
    pub job_type: String,
}
