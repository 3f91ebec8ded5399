//! Core infrastructure for pgstress workloads.
//!
//! This crate provides shared functionality used across the pgstress crates:
//! - Event system for observability
//! - Common error aliases

pub mod error;
pub mod events;

pub use error::BoxError;
pub use events::{EventListener, WorkloadEvent};
