//! Error types for the temp-files workload.

use pgstress_engine::SessionError;

/// Errors surfaced by [`TempFiles::run`](crate::TempFiles::run).
///
/// Both variants are setup failures: once the session loop has started, the
/// run can only end in clean cancellation.
#[derive(Debug, thiserror::Error)]
pub enum TempFilesError {
    /// Connecting the pool to the target database failed.
    #[error("failed to connect to postgres: {0}")]
    Connect(#[source] sqlx::Error),
    /// The session aborted before entering its loop.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type for temp-files operations.
pub type Result<T> = std::result::Result<T, TempFilesError>;
