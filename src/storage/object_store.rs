//! Remote object storage for archives

use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Blob storage addressed by key within one bucket
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key`, replacing any existing object
    fn put_object(&self, key: &str, body: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Stream the object under `key` into `destination` and return the bytes written.
    ///
    /// # Errors
    /// Fails with [`Error::Transfer`] if there is no object under `key`.
    fn get_object_to_file(
        &self,
        key: &str,
        destination: &Path,
    ) -> impl Future<Output = Result<u64>> + Send;
}

/// Where archives are kept
#[derive(Clone, Debug)]
pub struct S3Config {
    pub bucket: String,
    /// Endpoint host, optionally with a port
    pub host: String,
    /// `http` or `https`
    pub schema: String,
    pub timeout: Duration,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: "dashboard".to_string(),
            host: "s3.amazonaws.com".to_string(),
            schema: "https".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// S3-compatible store using path-style URLs: `{schema}://{host}/{bucket}/{key}`.
///
/// Requests are not signed, so the bucket must accept anonymous reads and
/// writes (or sit behind a proxy that signs them).
#[derive(Clone, Debug)]
pub struct S3Store {
    client: Client,
    base: Url,
    bucket: String,
}

impl S3Store {
    pub fn try_new(config: S3Config) -> Result<Self> {
        let raw = format!("{}://{}/", config.schema, config.host);
        let base = Url::parse(&raw).map_err(|source| Error::Url { url: raw, source })?;
        if base.cannot_be_a_base() {
            return Err(Error::Client(format!("{} cannot hold bucket paths", base)));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            client,
            base,
            bucket: config.bucket,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// `{base}/{bucket}/{key}`
    pub fn object_url(&self, key: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.bucket).push(key);
        }
        url
    }
}

impl ObjectStore for S3Store {
    async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<()> {
        let url = self.object_url(key);
        let size = body.len();
        log::debug!("PUT {} ({} bytes)", url, size);

        let response = self
            .client
            .put(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/gzip")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::network(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transfer(format!(
                "upload to {} failed ({}): {}",
                url, status, body
            )));
        }

        log::debug!("Stored {} bytes under {}", size, key);
        Ok(())
    }

    async fn get_object_to_file(&self, key: &str, destination: &Path) -> Result<u64> {
        let url = self.object_url(key);
        log::debug!("GET {}", url);

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::network(url.as_str(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::Transfer(format!(
                "no object '{}' in bucket '{}'",
                key, self.bucket
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transfer(format!(
                "download from {} failed ({}): {}",
                url, status, body
            )));
        }

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| Error::io("failed to create", destination, e))?;

        let mut written = 0u64;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Error::network(url.as_str(), e))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| Error::io("failed to write", destination, e))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|e| Error::io("failed to write", destination, e))?;

        log::debug!("Fetched {} bytes from {}", written, key);
        Ok(written)
    }
}
