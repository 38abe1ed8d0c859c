//! Core domain types
//!
//! These types describe the nodes being polled, the job records they return
//! and the per-run store the normalized results are accumulated in.

pub mod job;
pub mod node;
pub mod store;
