//! Error types for the admission gate.

/// Errors that can occur while waiting for a slot.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AcquireError {
    /// The session was cancelled before a slot became free.
    #[error("admission abandoned: session cancelled while waiting for a slot")]
    Cancelled,
    /// The gate was closed and will hand out no further slots.
    #[error("gate is closed")]
    Closed,
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, AcquireError>;
