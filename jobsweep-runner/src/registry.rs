//! Node registry loader

use jobsweep_core::domain::node::NodeDescriptor;
use std::path::Path;
use tracing::{info, warn};

use crate::error::LoadError;

/// Reads the node registry: a JSON array of `{name, url, username, password}`
///
/// Only the JSON shape is checked. A bad URL or wrong credentials show up
/// later as a failure for that node.
pub async fn load_nodes(path: &Path) -> Result<Vec<NodeDescriptor>, LoadError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::read(path, e))?;

    let nodes: Vec<NodeDescriptor> =
        serde_json::from_str(&data).map_err(|e| LoadError::parse(path, e))?;

    if nodes.is_empty() {
        warn!("Node registry {} lists no nodes", path.display());
    } else {
        info!("Loaded {} node(s) from {}", nodes.len(), path.display());
    }

    Ok(nodes)
}
