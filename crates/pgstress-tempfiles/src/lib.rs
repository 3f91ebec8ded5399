//! Temp-file pressure workload for PostgreSQL.
//!
//! PostgreSQL spills sorts and aggregations to temporary files when they
//! outgrow `work_mem`. Sustained temp-file churn is a realistic failure mode
//! — it competes with WAL and data files for disk bandwidth — and this
//! workload reproduces it on demand: a scratch table of 26 random text
//! columns, and a stress query that groups and sorts over all of them with
//! no index to lean on.
//!
//! The crate supplies only the domain fixtures (SQL, pool, configuration);
//! concurrency, pacing, and lifecycle come from `pgstress-engine`. A run
//! seeds the scratch table, hammers the stress query until the caller's
//! cancellation token fires, then drops the table.
//!
//! The SQL itself is exported from [`queries`] for operators who want to
//! inspect or tune what the workload sends.
//!
//! ```rust,no_run
//! use pgstress_tempfiles::{TempFiles, TempFilesConfig};
//! use std::num::NonZeroU32;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), pgstress_tempfiles::TempFilesError> {
//! let config = TempFilesConfig::builder()
//!     .postgres_url("postgresql://postgres@127.0.0.1:5432/postgres")
//!     .jobs(4)
//!     .rate(NonZeroU32::new(50).unwrap())
//!     .scale_factor(10)
//!     .build();
//!
//! let shutdown = CancellationToken::new();
//! let timer = shutdown.clone();
//! tokio::spawn(async move {
//!     tokio::time::sleep(Duration::from_secs(60)).await;
//!     timer.cancel();
//! });
//!
//! TempFiles::new(config).run(shutdown).await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod queries;
pub mod workload;

pub use config::{TempFilesConfig, TempFilesConfigBuilder};
pub use error::{Result, TempFilesError};
pub use workload::TempFiles;
