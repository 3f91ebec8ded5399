//! The opaque operation set a session drives.

use async_trait::async_trait;
use pgstress_core::BoxError;
use std::sync::Arc;

/// The set of operations a stress workload exposes to the session engine.
///
/// The engine treats every operation as a black box: it never inspects SQL,
/// schemas, or results. It only decides *when* each operation runs and what
/// happens to its error (prepare failures abort the session, exercise
/// failures are discarded, cleanup failures are swallowed).
///
/// Implementations are shared across concurrently dispatched operations, so
/// any connection handle they hold must itself be safe for concurrent use.
#[async_trait]
pub trait Workload: Send + Sync + 'static {
    /// Brings the external resource into the state the workload needs:
    /// creates structures and seeds data.
    ///
    /// Called exactly once per session, before any operation is dispatched,
    /// and awaited to completion. Structure creation is expected to be
    /// idempotent (re-creating an existing structure is a no-op); seeding is
    /// not (re-running appends). The first error aborts preparation without
    /// partial cleanup.
    async fn prepare(&self) -> Result<(), BoxError>;

    /// Executes one stress operation.
    ///
    /// The session discards the result: a failed operation is neither
    /// retried nor reported. Implementations should not build their own
    /// retry loops on top of this.
    async fn exercise(&self) -> Result<(), BoxError>;

    /// Removes whatever [`prepare`](Workload::prepare) created.
    ///
    /// Always attempted once the session loop has exited, even while late
    /// operations are still in flight. Errors are logged and swallowed by
    /// the session.
    async fn cleanup(&self) -> Result<(), BoxError>;
}

/// Sharing a workload through `Arc` keeps it a `Workload`: every call is
/// forwarded to the inner value. This lets a caller hand a clone to the
/// session while retaining a handle to the same instance.
#[async_trait]
impl<W: Workload> Workload for Arc<W> {
    async fn prepare(&self) -> Result<(), BoxError> {
        (**self).prepare().await
    }

    async fn exercise(&self) -> Result<(), BoxError> {
        (**self).exercise().await
    }

    async fn cleanup(&self) -> Result<(), BoxError> {
        (**self).cleanup().await
    }
}
