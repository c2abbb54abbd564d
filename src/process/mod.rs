// src/process/mod.rs
use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::info;

use crate::config::SourceConfig;

pub mod convert;
pub mod extract;
pub mod schema;

/// Encoded Parquet file, held entirely in memory.
///
/// `Bytes` has no read position of its own; every reader built from `data`
/// starts at the first byte.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub data: Bytes,
    /// Rows in the encoded table.
    pub rows: usize,
}

impl Artifact {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Extract the configured member from `archive` and re-encode it as Parquet.
#[tracing::instrument(level = "info", skip(archive, source), fields(member = %source.member_name))]
pub fn transcode_member(archive: &[u8], source: &SourceConfig) -> Result<Artifact> {
    let text = extract::read_member(archive, &source.member_name)?;
    let artifact = convert::delimited_to_parquet(&text, source)
        .with_context(|| format!("converting {} to parquet", source.member_name))?;

    info!(rows = artifact.rows, bytes = artifact.len(), "converted to parquet");
    Ok(artifact)
}
