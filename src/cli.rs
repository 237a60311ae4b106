//! CLI helper functions

use crate::{
    backup::{push_all_from_disk, save_all_types},
    client::{Cluster, ClusterClient},
    storage::{S3Config, S3Store, pull_from_store, push_to_store},
};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

fn connect(cluster: Cluster) -> Result<ClusterClient> {
    let client = ClusterClient::try_new(cluster).context("Failed to create cluster client")?;
    log::info!("Using saved objects index {}", client.bright_black());
    Ok(client)
}

/// Save every saved object from the cluster to `directory`.
///
/// With an S3 config the saved tree is then archived and uploaded.
pub async fn save(directory: impl AsRef<Path>, cluster: Cluster, s3: Option<S3Config>) -> Result<()> {
    let directory = directory.as_ref();
    let client = connect(cluster)?;

    log::info!("Saving objects to {}", directory.display().bright_black());
    let report = save_all_types(&client, directory)
        .await
        .wrap_err("Failed to save objects from the cluster")?;
    log::info!(
        "✓ Saved {} object(s) ({})",
        report.written.total(),
        report.written
    );

    if let Some(config) = s3 {
        let store = S3Store::try_new(config).context("Failed to create S3 client")?;
        log::info!("Archiving {} to bucket {}", directory.display().bright_black(), store.bucket().cyan());
        let upload = push_to_store(directory, &store)
            .await
            .wrap_err("Failed to upload archive")?;
        log::info!("✓ Uploaded {} ({} bytes)", upload.key, upload.bytes);
    }

    Ok(())
}

/// Push every saved object under `directory` to the cluster.
///
/// With an S3 config the archive is first downloaded and extracted into
/// `directory`.
pub async fn load(directory: impl AsRef<Path>, cluster: Cluster, s3: Option<S3Config>) -> Result<()> {
    let directory = directory.as_ref();
    let client = connect(cluster)?;

    if let Some(config) = s3 {
        let store = S3Store::try_new(config).context("Failed to create S3 client")?;
        log::info!("Fetching archive from bucket {}", store.bucket().cyan());
        let download = pull_from_store(directory, &store)
            .await
            .wrap_err("Failed to download archive")?;
        log::info!(
            "✓ Extracted {} file(s) to {}",
            download.files,
            directory.display().bright_black()
        );
    }

    log::info!("Loading objects from {}", directory.display().bright_black());
    let report = push_all_from_disk(&client, directory)
        .await
        .wrap_err("Failed to load objects into the cluster")?;
    log::info!(
        "✓ Pushed {} object(s) ({})",
        report.pushed.total(),
        report.pushed
    );

    Ok(())
}
