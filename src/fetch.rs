// src/fetch.rs

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

/// Download the archive at `url` and return the whole body in memory.
///
/// A transport failure or any non-2xx status aborts with an error; there is
/// no retry.
#[instrument(level = "info", skip(client))]
pub async fn download_archive(client: &Client, url: &str) -> Result<Bytes> {
    let url = Url::parse(url).with_context(|| format!("parsing source URL {}", url))?;

    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("unexpected status from {}", url))?
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;

    info!(url = %url, bytes = body.len(), "File downloaded");
    Ok(body)
}
