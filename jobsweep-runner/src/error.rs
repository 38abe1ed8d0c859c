//! Runner error types
//!
//! One enum per failure scope: the registry load aborts the run, retrieval
//! errors stop a single node, write errors affect a single file.

use jobsweep_client::ClientError;
use std::path::Path;
use thiserror::Error;

/// Node registry could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read node registry {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse node registry {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Retrieval failed for one node
#[derive(Debug, Error)]
pub enum RetrieveError {
    #[error("authentication against {node} failed: {source}")]
    Auth { node: String, source: ClientError },

    #[error("fetching jobs from {node} failed: {source}")]
    Fetch { node: String, source: ClientError },
}

impl RetrieveError {
    /// Name of the node the error belongs to
    pub fn node(&self) -> &str {
        match self {
            Self::Auth { node, .. } | Self::Fetch { node, .. } => node,
        }
    }

    /// True when the node answered the login with a 4xx status
    pub fn credentials_rejected(&self) -> bool {
        matches!(self, Self::Auth { source, .. } if source.is_client_error())
    }
}

/// One output file could not be written
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The node name cannot be used as a file name inside the output directory
    #[error("Refusing to write files for node {node:?}: not a plain file name")]
    UnsafeName { node: String },
}
