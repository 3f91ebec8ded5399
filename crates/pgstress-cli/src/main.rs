//! Command-line front end for the pgstress workloads.
//!
//! Runs the temp-files workload against a target database until Ctrl-C or an
//! optional `--duration-secs` timer, whichever fires first.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use pgstress_tempfiles::{TempFiles, TempFilesConfig};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone, Serialize)]
#[command(
    name = "pgstress",
    about = "Drive PostgreSQL into controlled stress conditions",
    version
)]
struct Args {
    /// Connection string for the target database.
    #[arg(
        long,
        env = "PGSTRESS_POSTGRES_URL",
        default_value = "postgresql://postgres@127.0.0.1:5432/postgres"
    )]
    postgres_url: String,
    /// How many stress queries may be in flight at once.
    #[arg(long, default_value_t = 2)]
    jobs: usize,
    /// Target stress queries per second (applied per job slot).
    #[arg(long, default_value_t = 10)]
    rate: u32,
    /// Fixture volume multiplier; each unit seeds 1000 rows.
    #[arg(long, default_value_t = 10)]
    scale_factor: u32,
    /// How long to run, in seconds. Runs until Ctrl-C when absent.
    #[arg(long)]
    duration_secs: Option<u64>,
    /// Log filter directives, e.g. "info" or "pgstress_engine=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&args.log_filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    anyhow::ensure!(args.jobs >= 1, "--jobs must be at least 1");
    let rate = NonZeroU32::new(args.rate).context("--rate must be greater than zero")?;

    // The URL may carry credentials; keep it out of the config dump.
    let mut dump = serde_json::to_value(&args)?;
    dump["postgres_url"] = serde_json::Value::String("<redacted>".to_string());
    info!(config = %dump, "starting temp-files workload");

    let config = TempFilesConfig::builder()
        .postgres_url(&args.postgres_url)
        .jobs(args.jobs)
        .rate(rate)
        .scale_factor(args.scale_factor)
        .build();

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    let limit = args.duration_secs.map(Duration::from_secs);
    tokio::spawn(async move {
        match limit {
            Some(limit) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("interrupt received, stopping"),
                    _ = tokio::time::sleep(limit) => info!("duration elapsed, stopping"),
                }
            }
            None => {
                let _ = tokio::signal::ctrl_c().await;
                info!("interrupt received, stopping");
            }
        }
        trigger.cancel();
    });

    TempFiles::new(config).run(shutdown).await?;
    info!("workload finished");
    Ok(())
}
