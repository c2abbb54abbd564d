// src/test_support.rs
//! Fixtures shared by the unit tests.

use anyhow::{bail, Result};
use bytes::Bytes;
use std::{
    collections::HashMap,
    io::{Cursor, Write},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use warp::Filter;
use zip::{write::SimpleFileOptions, CompressionMethod};

use crate::upload::ObjectStore;

/// One well-formed record from the GeoNames US dump.
pub const NEW_YORK_ROW: &str =
    "US\t10001\tNew York\tNew York\tNY\tNew York County\t061\t\t\t40.75\t-73.99\t4\n";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,geozip=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Build a ZIP holding a single member.
pub fn location_zip(member: &str, content: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(member, options)?;
        zip.write_all(content.as_bytes())?;
        zip.finish()?;
    }
    Ok(buf)
}

/// Serve `archive` at `/export/zip/US.zip` on an ephemeral port and return
/// its URL. Any other path answers 404.
pub async fn serve_archive(archive: Vec<u8>) -> String {
    let route = warp::path!("export" / "zip" / "US.zip")
        .and(warp::get())
        .map(move || archive.clone());

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    format!("http://{}/export/zip/US.zip", addr)
}

/// Keeps uploads in a map keyed by bucket and path.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), Bytes>>,
}

impl MemoryStore {
    pub fn get(&self, bucket: &str, path: &str) -> Option<Bytes> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), path.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    async fn put(&self, bucket: &str, path: &str, data: Bytes) -> Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), path.to_string()), data);
        Ok(())
    }
}

/// Rejects every write, like a bucket the caller cannot write to.
pub struct FailingStore;

impl ObjectStore for FailingStore {
    async fn put(&self, bucket: &str, path: &str, _data: Bytes) -> Result<()> {
        bail!("permission denied writing {} to {}", path, bucket)
    }
}
