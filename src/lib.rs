//! Ingest the GeoNames US postal-code dump into Google Cloud Storage.
//!
//! The run is a straight line: [`fetch`] downloads the ZIP, [`process`]
//! pulls `US.txt` out of it and re-encodes the leading seven columns as
//! Parquet, and [`upload`] stores the buffer under a caller-chosen object
//! path. [`pipeline::run`] drives the three in order.

pub mod config;
pub mod fetch;
pub mod inspect;
pub mod pipeline;
pub mod process;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use config::SourceConfig;
pub use pipeline::{run, RunSummary};
