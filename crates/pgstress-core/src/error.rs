//! Shared error aliases for pgstress workloads.

/// A type-erased error.
///
/// Workload operations are opaque to the session engine: the engine never
/// inspects what went wrong inside an operation, it only decides whether the
/// error crosses the `run()` boundary. A boxed error object is all that is
/// needed for that, and it lets each workload crate keep its own concrete
/// error types private.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
