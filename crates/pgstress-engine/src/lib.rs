//! Session engine for pgstress workloads.
//!
//! The engine runs one opaque workload through a fixed lifecycle: prepare
//! fixtures, then admit and dispatch stress operations at a bounded
//! concurrency and rate until the caller cancels, then tear the fixtures
//! down. It is deliberately indifferent to what the operations do — SQL,
//! schemas, and connection handling live in workload crates such as
//! `pgstress-tempfiles`.
//!
//! Three contracts shape the loop:
//!
//! - **Bounded concurrency**: at most `workers` operations are in flight at
//!   any instant, enforced by [`pgstress_gate::AdmissionGate`].
//! - **Per-slot pacing**: each worker slot sleeps `1s / rate` after its
//!   operation before freeing up ([`Pacer`]); there is no global ticker.
//! - **Fire-and-forget shutdown**: cancellation stops admission immediately
//!   but does not wait for in-flight operations, which may race against
//!   teardown.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use pgstress_core::BoxError;
//! use pgstress_engine::{Session, SessionConfig, Workload};
//! use std::num::NonZeroU32;
//! use tokio_util::sync::CancellationToken;
//!
//! struct Noop;
//!
//! #[async_trait]
//! impl Workload for Noop {
//!     async fn prepare(&self) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//!     async fn exercise(&self) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//!     async fn cleanup(&self) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() {
//! let config = SessionConfig::builder()
//!     .workers(5)
//!     .ops_per_second(NonZeroU32::new(100).unwrap())
//!     .name("noop")
//!     .build();
//!
//! let shutdown = CancellationToken::new();
//! let session = Session::new(config, Noop);
//!
//! // Cancel from elsewhere (Ctrl-C handler, duration timer, test body)...
//! shutdown.cancel();
//! // ...and the session returns cleanly once it observes the token.
//! session.run(shutdown).await.unwrap();
//! # }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod pacing;
pub mod session;
pub mod workload;

pub use config::{SessionConfig, SessionConfigBuilder};
pub use error::{Result, SessionError};
pub use events::SessionEvent;
pub use pacing::Pacer;
pub use session::Session;
pub use workload::Workload;
