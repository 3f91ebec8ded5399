//! Error types for the session engine.

use pgstress_core::BoxError;

/// Errors surfaced by [`Session::run`](crate::Session::run).
///
/// Only setup-phase failures cross the run boundary. Once the loop has
/// started, operation errors are discarded and cleanup errors are swallowed,
/// so a running session always terminates with `Ok(())` when cancelled.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Fixture preparation failed; the loop was never entered.
    #[error("workload preparation failed: {0}")]
    Prepare(#[source] BoxError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
