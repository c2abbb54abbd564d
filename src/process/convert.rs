// src/process/convert.rs
use crate::config::SourceConfig;
use crate::process::schema::LayoutSchema;
use crate::process::Artifact;
use anyhow::{Context, Result};
use arrow::csv::ReaderBuilder;
use bytes::Bytes;
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use regex::Regex;
use std::io::Cursor;
use tracing::debug;

/// Rows decoded per record batch.
const BATCH_ROWS: usize = 64 * 1024;

/// Matches no input at all, not even the empty string, so blank fields stay
/// `""` instead of turning into nulls.
const NEVER_NULL: &str = "$.^";

/// Parse headerless delimited text with the configured layout, keep the
/// selected columns and encode the result as an in-memory Parquet file.
///
/// Every line must carry exactly as many fields as the layout declares. One
/// bad line fails the whole conversion and nothing is returned. Values are
/// kept verbatim; an empty field is an empty string, never a null.
pub fn delimited_to_parquet(text: &[u8], source: &SourceConfig) -> Result<Artifact> {
    let layout = LayoutSchema::new(&source.column_names, &source.include_columns)?;
    let never_null = Regex::new(NEVER_NULL).context("compiling null rule")?;

    let reader = ReaderBuilder::new(layout.read_schema())
        .with_header(false)
        .with_delimiter(source.delimiter)
        .with_batch_size(BATCH_ROWS)
        .with_null_regex(never_null)
        .with_projection(layout.projection().to_vec())
        .build(Cursor::new(text))
        .context("creating delimited reader")?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut buffer = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut buffer, layout.output_schema(), Some(props))
        .context("creating parquet writer")?;

    let mut rows = 0;
    for (idx, batch) in reader.enumerate() {
        let batch = batch.with_context(|| {
            format!("parsing {} (batch {} after {} rows)", source.member_name, idx, rows)
        })?;
        rows += batch.num_rows();
        writer.write(&batch).context("writing batch to parquet")?;
    }
    writer.close().context("closing parquet writer")?;

    debug!(rows, bytes = buffer.len(), "encoded parquet");
    Ok(Artifact {
        data: Bytes::from(buffer),
        rows,
    })
}
