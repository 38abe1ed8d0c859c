//! Per-run job store

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::job::NormalizedJob;

/// Normalized jobs keyed by node name, in the order nodes were registered
///
/// A store is built at the start of a run and handed through the pipeline;
/// it is append-only and never outlives the run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct JobStore {
    nodes: IndexMap<String, Vec<NormalizedJob>>,
}

impl JobStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures an entry exists for `node`
    ///
    /// Existing entries are left untouched, so a repeated node name keeps the
    /// jobs recorded under it so far.
    pub fn register_node(&mut self, node: &str) {
        if !self.nodes.contains_key(node) {
            self.nodes.insert(node.to_string(), Vec::new());
        }
    }

    /// Appends jobs under `node` in iteration order
    pub fn extend<I>(&mut self, node: &str, jobs: I)
    where
        I: IntoIterator<Item = NormalizedJob>,
    {
        self.register_node(node);
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.extend(jobs);
        }
    }

    /// Jobs recorded for `node`, if the node was registered
    pub fn jobs(&self, node: &str) -> Option<&[NormalizedJob]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    /// Contract addresses for `node`, nulls kept in place
    pub fn addresses(&self, node: &str) -> Option<Vec<Option<String>>> {
        self.jobs(node)
            .map(|jobs| jobs.iter().map(|job| job.contract.clone()).collect())
    }

    /// Iterates `(node, jobs)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NormalizedJob])> {
        self.nodes
            .iter()
            .map(|(name, jobs)| (name.as_str(), jobs.as_slice()))
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of jobs across all nodes
    pub fn total_jobs(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }
}
