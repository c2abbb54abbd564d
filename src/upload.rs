// src/upload.rs

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use google_cloud_storage::{
    client::{Client, ClientConfig},
    http::objects::upload::{Media, UploadObjectRequest, UploadType},
};
use std::path::Path;
use tracing::{debug, info};

const PARQUET_CONTENT_TYPE: &str = "application/vnd.apache.parquet";

/// Destination for the finished artifact. One call writes one object,
/// replacing whatever was stored at `path` before.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    async fn put(&self, bucket: &str, path: &str, data: Bytes) -> Result<()>;
}

/// Google Cloud Storage, authenticated through Application Default Credentials.
pub struct GcsStore {
    client: Client,
}

impl GcsStore {
    pub async fn from_default_credentials() -> Result<Self> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .context("authenticating to GCS")?;
        Ok(Self {
            client: Client::new(config),
        })
    }
}

impl ObjectStore for GcsStore {
    async fn put(&self, bucket: &str, path: &str, data: Bytes) -> Result<()> {
        let len = data.len() as u64;
        let mut media = Media::new(path.to_string());
        media.content_length = Some(len);
        if path.ends_with(".parquet") {
            media.content_type = PARQUET_CONTENT_TYPE.into();
        }

        let request = UploadObjectRequest {
            bucket: bucket.to_string(),
            ..Default::default()
        };

        self.client
            .upload_object(&request, data, &UploadType::Simple(media))
            .await
            .with_context(|| format!("Failed to upload {} to GCS bucket {}", path, bucket))?;

        info!(object = %path, bytes = len, "Uploaded to GCS");
        Ok(())
    }
}

/// Check an object path before anything is fetched or written.
///
/// The path may nest folder segments but must not start with `/`, must not
/// contain empty segments and its last segment must carry an extension,
/// e.g. `locations/us.parquet`.
pub fn validate_destination(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("destination path is empty");
    }
    if path.starts_with('/') {
        bail!("destination path {:?} must be relative to the bucket", path);
    }
    if path.split('/').any(str::is_empty) {
        bail!("destination path {:?} contains an empty segment", path);
    }

    let file_name = path.rsplit('/').next().unwrap_or(path);
    if Path::new(file_name).extension().is_none() {
        bail!("destination path {:?} needs a file extension", path);
    }

    debug!(path, "destination accepted");
    Ok(())
}
