//! Configuration for the temp-files workload.

use std::num::NonZeroU32;

/// Rows seeded into the scratch table per unit of scale factor.
pub(crate) const ROWS_PER_SCALE_UNIT: i64 = 1000;

/// Configuration for a temp-files workload run.
#[derive(Debug, Clone)]
pub struct TempFilesConfig {
    /// Connection string for the target database.
    pub(crate) postgres_url: String,
    /// Cap on simultaneously in-flight stress queries.
    pub(crate) jobs: usize,
    /// Target stress queries per second (per-slot pacing).
    pub(crate) rate: NonZeroU32,
    /// Multiplier for the seeded fixture volume.
    pub(crate) scale_factor: u32,
    /// Name of this workload instance.
    pub(crate) name: String,
}

impl TempFilesConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> TempFilesConfigBuilder {
        TempFilesConfigBuilder::new()
    }

    /// Rows the seed step will insert.
    pub fn seed_rows(&self) -> i64 {
        ROWS_PER_SCALE_UNIT * i64::from(self.scale_factor)
    }
}

/// Builder for temp-files configuration.
pub struct TempFilesConfigBuilder {
    postgres_url: String,
    jobs: usize,
    rate: NonZeroU32,
    scale_factor: u32,
    name: String,
}

impl TempFilesConfigBuilder {
    /// Creates a new builder with default values.
    ///
    /// Defaults:
    /// - postgres_url: `postgresql://postgres@127.0.0.1:5432/postgres`
    /// - jobs: 1
    /// - rate: 10
    /// - scale_factor: 1 (1000 seeded rows)
    /// - name: "tempfiles"
    pub fn new() -> Self {
        Self {
            postgres_url: "postgresql://postgres@127.0.0.1:5432/postgres".to_string(),
            jobs: 1,
            rate: NonZeroU32::new(10).expect("10 is non-zero"),
            scale_factor: 1,
            name: "tempfiles".to_string(),
        }
    }

    /// Sets the connection string for the target database.
    pub fn postgres_url(mut self, url: impl Into<String>) -> Self {
        self.postgres_url = url.into();
        self
    }

    /// Sets the cap on simultaneously in-flight stress queries.
    ///
    /// Default: 1
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Sets the target rate in stress queries per second.
    ///
    /// Applied per worker slot, not globally; see `pgstress_engine::Pacer`.
    ///
    /// Default: 10
    pub fn rate(mut self, rate: NonZeroU32) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the fixture volume multiplier. Each unit seeds 1000 rows; zero
    /// seeds nothing, which still exercises the loop but spills no sorts.
    ///
    /// Default: 1
    pub fn scale_factor(mut self, scale_factor: u32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Sets the name of this workload instance (used in events and logs).
    ///
    /// Default: "tempfiles"
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `jobs` is zero.
    pub fn build(self) -> TempFilesConfig {
        assert!(self.jobs >= 1, "tempfiles jobs must be at least 1");
        TempFilesConfig {
            postgres_url: self.postgres_url,
            jobs: self.jobs,
            rate: self.rate,
            scale_factor: self.scale_factor,
            name: self.name,
        }
    }
}

impl Default for TempFilesConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
