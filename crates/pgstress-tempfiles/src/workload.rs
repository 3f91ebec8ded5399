//! The pool-backed operation set and the public run surface.

use crate::config::TempFilesConfig;
use crate::error::TempFilesError;
use crate::queries;
use async_trait::async_trait;
use pgstress_core::BoxError;
use pgstress_engine::{Session, SessionConfig, Workload};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;

/// The temp-files workload: drives PostgreSQL into temp-file pressure by
/// repeatedly running a large unindexed group-and-sort at a bounded rate and
/// concurrency.
///
/// ```rust,no_run
/// use pgstress_tempfiles::{TempFiles, TempFilesConfig};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), pgstress_tempfiles::TempFilesError> {
/// let config = TempFilesConfig::builder()
///     .postgres_url("postgresql://postgres@127.0.0.1:5432/postgres")
///     .jobs(4)
///     .scale_factor(10)
///     .build();
///
/// let shutdown = CancellationToken::new();
/// // Wire `shutdown` to Ctrl-C or a timer, then:
/// TempFiles::new(config).run(shutdown).await
/// # }
/// ```
pub struct TempFiles {
    config: TempFilesConfig,
}

impl TempFiles {
    /// Creates a workload from the given configuration.
    pub fn new(config: TempFilesConfig) -> Self {
        Self { config }
    }

    /// Runs the workload until the token is cancelled.
    ///
    /// Connects a pool, seeds the scratch table, then loops stress queries
    /// until cancellation and drops the table again. Only setup failures
    /// (connect, prepare) are returned; cancellation is a clean `Ok(())`.
    /// The pool is closed when the session ends, whatever the outcome.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<(), TempFilesError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.config.jobs as u32)
            .connect(&self.config.postgres_url)
            .await
            .map_err(TempFilesError::Connect)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            workload = %self.config.name,
            jobs = self.config.jobs,
            rate = self.config.rate.get(),
            seed_rows = self.config.seed_rows(),
            "pool connected"
        );

        let session_config = SessionConfig::builder()
            .workers(self.config.jobs)
            .ops_per_second(self.config.rate)
            .name(self.config.name.clone())
            .build();

        let ops = ScratchTableOps {
            pool: pool.clone(),
            seed_rows: self.config.seed_rows(),
        };

        let result = Session::new(session_config, ops).run(shutdown).await;

        // In-flight queries lose their connections here; that is the
        // accepted shutdown semantic, not a drain.
        pool.close().await;

        Ok(result?)
    }
}

/// Operation set bound to a connected pool.
struct ScratchTableOps {
    pool: PgPool,
    seed_rows: i64,
}

#[async_trait]
impl Workload for ScratchTableOps {
    async fn prepare(&self) -> Result<(), BoxError> {
        sqlx::query(queries::CREATE_SCRATCH_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(queries::SEED_SCRATCH_TABLE)
            .bind(self.seed_rows)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exercise(&self) -> Result<(), BoxError> {
        sqlx::query(queries::SORT_SPILL_QUERY)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn cleanup(&self) -> Result<(), BoxError> {
        sqlx::query(queries::DROP_SCRATCH_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
