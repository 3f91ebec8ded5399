//! Bounded-admission gate for pgstress workloads.
//!
//! A stress workload must keep a fixed ceiling on how many operations are in
//! flight at once, no matter how fast individual operations finish or fail.
//! The gate provides that ceiling: a counting semaphore handing out owned
//! slot permits, with a cancellation-aware acquire for the session loop and
//! a release path (permit drop) that never blocks.
//!
//! # Basic Example
//!
//! ```rust
//! use pgstress_gate::GateConfig;
//!
//! # async fn example() {
//! let gate = GateConfig::builder()
//!     .capacity(5)
//!     .name("tempfiles")
//!     .build();
//!
//! let permit = gate.acquire().await.unwrap();
//! assert_eq!(gate.in_flight(), 1);
//! drop(permit);
//! assert_eq!(gate.in_flight(), 0);
//! # }
//! ```
//!
//! # Cancellation
//!
//! A session loop admits operations only while its cancellation token is
//! live. `acquire_with` waits on whichever comes first: a free slot or the
//! token firing.
//!
//! ```rust
//! use pgstress_gate::{AcquireError, GateConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let gate = GateConfig::builder().capacity(1).build();
//! let shutdown = CancellationToken::new();
//!
//! let _held = gate.acquire().await.unwrap();
//! shutdown.cancel();
//!
//! // The only slot is taken, so the cancelled token wins.
//! let outcome = gate.acquire_with(&shutdown).await;
//! assert!(matches!(outcome, Err(AcquireError::Cancelled)));
//! # }
//! ```
//!
//! # Example with Event Listeners
//!
//! ```rust
//! use pgstress_gate::GateConfig;
//!
//! # async fn example() {
//! let gate = GateConfig::builder()
//!     .capacity(10)
//!     .name("tempfiles")
//!     .on_slot_acquired(|in_flight| {
//!         println!("slot acquired ({in_flight} in flight)");
//!     })
//!     .on_slot_released(|held| {
//!         println!("slot held for {held:?}");
//!     })
//!     .build();
//! # let _ = gate;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod gate;

pub use config::{GateConfig, GateConfigBuilder};
pub use error::{AcquireError, Result};
pub use events::GateEvent;
pub use gate::{AdmissionGate, SlotPermit};
