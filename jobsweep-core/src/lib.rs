//! Jobsweep Core
//!
//! Core types and transforms shared by the jobsweep crates.
//!
//! This crate contains:
//! - Domain types: nodes, remote job records, normalized jobs and the job store
//! - DTOs: the FetchJobs query document and its typed response envelope
//! - The job normalizer that projects remote records into result rows

pub mod domain;
pub mod dto;
pub mod normalize;

pub use normalize::{clean_name, normalize_job};
