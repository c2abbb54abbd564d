// src/pipeline.rs

use anyhow::Result;
use reqwest::Client;
use tracing::{info, instrument};

use crate::{config::SourceConfig, fetch, process, upload};

/// What a completed run stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub bytes: usize,
    pub object: String,
}

/// Fetch the archive, re-encode its member and store the result at
/// `bucket`/`destination`.
///
/// Steps run strictly in order and the first failure ends the run. Nothing
/// reaches the store unless the whole member converted cleanly.
#[instrument(level = "info", skip(client, store, source), fields(url = %source.url))]
pub async fn run<S: upload::ObjectStore>(
    client: &Client,
    store: &S,
    source: &SourceConfig,
    bucket: &str,
    destination: &str,
) -> Result<RunSummary> {
    upload::validate_destination(destination)?;

    let archive = fetch::download_archive(client, &source.url).await?;
    let artifact = process::transcode_member(&archive, source)?;

    let summary = RunSummary {
        rows: artifact.rows,
        bytes: artifact.len(),
        object: format!("gs://{}/{}", bucket, destination),
    };
    store.put(bucket, destination, artifact.data).await?;

    info!(rows = summary.rows, bytes = summary.bytes, "Saved location file to {}", summary.object);
    Ok(summary)
}
