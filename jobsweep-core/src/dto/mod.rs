//! Data Transfer Objects for node communication
//!
//! Wire shapes exchanged with a node's API, kept separate from the domain
//! types the rest of the pipeline works with.

pub mod query;
