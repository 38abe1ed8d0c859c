//! Service layer
//!
//! Services contain the run's business logic: walking the node registry
//! through authenticate → fetch → normalize → accumulate, and persisting the
//! accumulated results.

mod retrieval;
mod writer;

pub use retrieval::{Retrieval, RetrievalService};
pub use writer::{ResultWriter, WriteOutcome};
