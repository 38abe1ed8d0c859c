//! Repository layer
//!
//! Repositories are stateless HTTP gateways to the nodes being polled. They
//! expose the two calls a run makes per node without any pipeline logic.
//!
//! The trait lets the retrieval service run against stubs in tests.

mod nodes;

pub use nodes::{HttpNodeRepository, NodeRepository};
