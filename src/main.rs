use anyhow::Result;
use clap::Parser;
use geozip::{pipeline, upload::GcsStore, SourceConfig};
use reqwest::Client;
use std::{env, time::Instant};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Ingest location data into a GCS bucket
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Name of the GCS bucket to save to
    bucket_name: String,

    /// Object name inside the bucket; may include folders and should
    /// include an extension, e.g. myfolder/us_locations.parquet
    destination_file_name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    let args = Args::parse();
    info!(?args, "Arguments received");

    let start = Instant::now();
    let source = SourceConfig::default();
    let client = Client::new();
    let store = GcsStore::from_default_credentials().await?;

    let summary = pipeline::run(
        &client,
        &store,
        &source,
        &args.bucket_name,
        &args.destination_file_name,
    )
    .await?;

    info!(
        rows = summary.rows,
        bytes = summary.bytes,
        elapsed = ?start.elapsed(),
        "done: {}",
        summary.object
    );
    Ok(())
}
