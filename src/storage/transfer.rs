//! Moving a saved objects tree to and from an object store as one archive

use super::archive::{pack_directories, unpack_archive};
use super::object_store::ObjectStore;
use crate::{Error, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Key the archive is stored under
pub const ARCHIVE_KEY: &str = "dashboard.tar.gz";

/// What an upload sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReport {
    pub key: String,
    /// Top-level folders in the archive
    pub folders: Vec<String>,
    /// Compressed archive size
    pub bytes: u64,
}

/// What a download brought back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadReport {
    pub key: String,
    /// Compressed archive size
    pub bytes: u64,
    /// Regular files extracted
    pub files: usize,
}

fn temp_archive() -> Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("kibtools-")
        .suffix(".tar.gz")
        .tempfile()
        .map_err(|e| Error::io("failed to create temporary archive in", std::env::temp_dir(), e))
}

fn task_failed(e: tokio::task::JoinError) -> Error {
    Error::Transfer(format!("archive task failed: {}", e))
}

/// Archive every folder under `input` and upload it under [`ARCHIVE_KEY`].
///
/// The archive is built in a temporary file that is removed once this
/// returns, whether or not the upload succeeded.
///
/// # Errors
/// Fails with [`Error::Transfer`] if `input` has no folders or the store
/// rejects the upload.
pub async fn push_to_store<S: ObjectStore>(input: &Path, store: &S) -> Result<UploadReport> {
    let root = input.to_path_buf();
    let (archive, folders) = tokio::task::spawn_blocking(move || -> Result<_> {
        let mut archive = temp_archive()?;
        let folders = pack_directories(&root, archive.as_file_mut())?;
        Ok((archive, folders))
    })
    .await
    .map_err(task_failed)??;

    let body = tokio::fs::read(archive.path())
        .await
        .map_err(|e| Error::io("failed to read", archive.path(), e))?;
    let bytes = body.len() as u64;

    log::info!(
        "Uploading {} ({} bytes, folders: {})",
        ARCHIVE_KEY,
        bytes,
        folders.join(", ")
    );
    store.put_object(ARCHIVE_KEY, body).await?;

    Ok(UploadReport {
        key: ARCHIVE_KEY.to_string(),
        folders,
        bytes,
    })
}

/// Download [`ARCHIVE_KEY`] and extract it into `output`.
///
/// The download lands in a temporary file that is removed once this
/// returns, whether or not extraction succeeded.
///
/// # Errors
/// Fails with [`Error::Transfer`] if the object is absent or is not a gzip tar.
pub async fn pull_from_store<S: ObjectStore>(output: &Path, store: &S) -> Result<DownloadReport> {
    let archive = temp_archive()?;
    let bytes = store.get_object_to_file(ARCHIVE_KEY, archive.path()).await?;
    log::info!("Downloaded {} ({} bytes)", ARCHIVE_KEY, bytes);

    let output = output.to_path_buf();
    let files = tokio::task::spawn_blocking(move || -> Result<usize> {
        let file = archive
            .reopen()
            .map_err(|e| Error::io("failed to open", archive.path(), e))?;
        unpack_archive(std::io::BufReader::new(file), &output)
    })
    .await
    .map_err(task_failed)??;

    Ok(DownloadReport {
        key: ARCHIVE_KEY.to_string(),
        bytes,
        files,
    })
}
