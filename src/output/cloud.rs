//! Object storage sinks (S3, GCS, local filesystem)

use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Destination for a serialized payload.
///
/// Writes overwrite whatever is stored under the key.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Store `payload` under `key`, returning the full location written
    async fn write(&self, key: &str, payload: &str) -> Result<String>;
}

#[async_trait]
impl<T: Sink + ?Sized> Sink for Arc<T> {
    async fn write(&self, key: &str, payload: &str) -> Result<String> {
        (**self).write(key, payload).await
    }
}

/// Supported destination families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    /// Amazon S3 (and S3-compatible endpoints)
    #[default]
    S3,
    /// Google Cloud Storage
    Gcs,
    /// Local directory, mostly for dry runs
    Local,
}

impl DestinationKind {
    /// URL scheme used when reporting written locations
    pub fn scheme(&self) -> &'static str {
        match self {
            DestinationKind::S3 => "s3",
            DestinationKind::Gcs => "gs",
            DestinationKind::Local => "file",
        }
    }

    /// How the family expects payloads to be handed over
    pub fn upload_mode(&self) -> UploadMode {
        match self {
            DestinationKind::Gcs => UploadMode::TempFile,
            DestinationKind::S3 | DestinationKind::Local => UploadMode::Direct,
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DestinationKind::S3 => "s3",
            DestinationKind::Gcs => "gcs",
            DestinationKind::Local => "local",
        };
        f.write_str(name)
    }
}

/// How a payload reaches the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// Upload the string as-is
    Direct,
    /// Spool to a temporary file, then upload the file
    TempFile,
}

/// Sink backed by an `object_store` bucket or directory
#[derive(Debug, Clone)]
pub struct CloudSink {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Bucket/container (or root directory for local)
    bucket: String,
    /// Scheme for reporting
    scheme: String,
    /// Upload strategy
    mode: UploadMode,
}

impl CloudSink {
    /// Wrap an existing store
    pub fn new(
        store: Arc<dyn ObjectStore>,
        scheme: impl Into<String>,
        bucket: impl Into<String>,
        mode: UploadMode,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            scheme: scheme.into(),
            mode,
        }
    }

    /// Build the sink for a destination family.
    ///
    /// Credentials come from the environment (`AWS_*`, `GOOGLE_*`), the way
    /// the object_store builders read them.
    pub fn for_destination(
        kind: DestinationKind,
        bucket: &str,
        endpoint: Option<&str>,
    ) -> Result<Self> {
        if bucket.trim().is_empty() {
            return Err(Error::missing_field("destination.bucket"));
        }
        let bucket = match kind {
            DestinationKind::Local => bucket.strip_prefix("file://").unwrap_or(bucket),
            DestinationKind::S3 | DestinationKind::Gcs => bucket,
        };

        let store: Arc<dyn ObjectStore> = match kind {
            DestinationKind::S3 => {
                let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
                if let Some(endpoint) = endpoint {
                    builder = builder.with_endpoint(endpoint);
                }
                Arc::new(
                    builder
                        .build()
                        .map_err(|e| Error::config(format!("Failed to create S3 client: {e}")))?,
                )
            }
            DestinationKind::Gcs => Arc::new(
                GoogleCloudStorageBuilder::from_env()
                    .with_bucket_name(bucket)
                    .build()
                    .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?,
            ),
            DestinationKind::Local => {
                std::fs::create_dir_all(bucket).map_err(|e| {
                    Error::config(format!("Failed to create directory {bucket}: {e}"))
                })?;
                Arc::new(LocalFileSystem::new_with_prefix(bucket).map_err(|e| {
                    Error::config(format!("Failed to create local store: {e}"))
                })?)
            }
        };

        Ok(Self::new(store, kind.scheme(), bucket, kind.upload_mode()))
    }

    /// Upload mode in use
    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    /// Scheme (s3, gs, file)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Upload a string payload to `key`
    pub async fn upload_string(&self, key: &str, payload: &str) -> Result<String> {
        self.put(key, Bytes::copy_from_slice(payload.as_bytes()))
            .await
    }

    /// Upload the contents of a local file to `key`
    pub async fn upload_file(&self, key: &str, file: &Path) -> Result<String> {
        let data = tokio::fs::read(file).await.map_err(|e| {
            Error::sink(format!("Failed to read {}: {e}", file.display()))
        })?;
        self.put(key, Bytes::from(data)).await
    }

    async fn put(&self, key: &str, data: Bytes) -> Result<String> {
        let path = ObjectPath::from(key);
        let size = data.len();

        self.store
            .put(&path, data.into())
            .await
            .map_err(|e| Error::sink(format!("Failed to write {path}: {e}")))?;

        let location = format!("{}://{}/{path}", self.scheme, self.bucket.trim_end_matches('/'));
        info!(location, bytes = size, "Uploaded payload");
        Ok(location)
    }
}

#[async_trait]
impl Sink for CloudSink {
    async fn write(&self, key: &str, payload: &str) -> Result<String> {
        match self.mode {
            UploadMode::Direct => self.upload_string(key, payload).await,
            UploadMode::TempFile => {
                let mut tmp = tempfile::NamedTempFile::new()
                    .map_err(|e| Error::sink(format!("Failed to create temp file: {e}")))?;
                tmp.write_all(payload.as_bytes())
                    .and_then(|()| tmp.flush())
                    .map_err(|e| Error::sink(format!("Failed to write temp file: {e}")))?;
                debug!(file = %tmp.path().display(), "Spooled payload");

                self.upload_file(key, tmp.path()).await
            }
        }
    }
}
