// src/bin/inspect_artifact.rs
// Print the schema, row count and leading rows of a locally saved artifact,
// e.g. one fetched with `gcloud storage cp gs://bucket/path .`

use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;
use bytes::Bytes;
use geozip::inspect::{read_batches, summarize};
use std::{env, fmt::Write, fs, path::Path, process::exit};

const DEFAULT_PREVIEW_ROWS: usize = 10;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("inspect_artifact");
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <PARQUET_FILE> [PREVIEW_ROWS]", program);
        exit(1);
    }
    let preview_rows = match args.get(2) {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("PREVIEW_ROWS must be a number, got {:?}", n))?,
        None => DEFAULT_PREVIEW_ROWS,
    };

    print!("{}", render_report(Path::new(&args[1]), preview_rows)?);
    Ok(())
}

/// Build the printed report for the Parquet file at `path`.
fn render_report(path: &Path, preview_rows: usize) -> Result<String> {
    let data = Bytes::from(fs::read(path).with_context(|| format!("reading {}", path.display()))?);
    let summary = summarize(data.clone())?;

    let mut out = String::new();
    writeln!(out, "=== Parquet File: {} ===", path.display())?;
    writeln!(
        out,
        "Created by:           {}",
        summary.created_by.as_deref().unwrap_or("<unknown>")
    )?;
    writeln!(out, "Total rows:           {}", summary.rows)?;
    writeln!(out, "Number of row groups: {}", summary.row_groups)?;
    writeln!(out, "File size:            {} bytes", data.len())?;
    writeln!(out)?;

    writeln!(out, "=== Columns ===")?;
    for name in &summary.columns {
        writeln!(out, "- {}", name)?;
    }
    writeln!(out)?;

    let mut preview = Vec::new();
    let mut remaining = preview_rows;
    for batch in read_batches(data)? {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(batch.num_rows());
        preview.push(batch.slice(0, take));
        remaining -= take;
    }

    writeln!(out, "=== First {} rows ===", preview_rows - remaining)?;
    writeln!(out, "{}", pretty_format_batches(&preview)?)?;
    Ok(out)
}
