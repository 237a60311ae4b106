//! Saving every saved object kind to disk, and loading them back
//!
//! Both directions run one [`Pipeline`] per kind, in [`ObjectKind::ALL`]
//! order, and stop at the first error.

use crate::client::ClusterClient;
use crate::etl::{IdentityTransformer, Pipeline};
use crate::objects::{ObjectKind, ObjectsExtractor, ObjectsLoader};
use crate::storage::{KindDirectoryReader, KindDirectoryWriter};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Objects handled per kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCounts(BTreeMap<ObjectKind, usize>);

impl ObjectCounts {
    pub fn get(&self, kind: ObjectKind) -> usize {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    fn record(&mut self, kind: ObjectKind, count: usize) {
        self.0.insert(kind, count);
    }
}

impl std::fmt::Display for ObjectCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = ObjectKind::ALL
            .iter()
            .map(|kind| format!("{}: {}", kind, self.get(*kind)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Result of [`save_all_types`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveReport {
    pub directory: PathBuf,
    /// Files written per kind
    pub written: ObjectCounts,
}

/// Result of [`push_all_from_disk`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub directory: PathBuf,
    /// Documents pushed per kind
    pub pushed: ObjectCounts,
}

/// Fetch searches, visualizations and dashboards and write each object's
/// source to `<output>/<kind>/<name>.json`.
///
/// `output` is created if needed. A kind with no objects gets no folder.
///
/// # Errors
/// Any failed fetch, malformed object or failed write ends the save; files
/// already written stay on disk.
pub async fn save_all_types(client: &ClusterClient, output: &Path) -> Result<SaveReport> {
    std::fs::create_dir_all(output).map_err(|e| Error::io("failed to create", output, e))?;

    let mut written = ObjectCounts::default();
    for kind in ObjectKind::ALL {
        let pipeline = Pipeline::new(
            ObjectsExtractor::new(client.clone(), kind),
            IdentityTransformer::new(),
            KindDirectoryWriter::new(output, kind),
        );
        let count = pipeline.run().await?;
        if count == 0 {
            log::info!("No {} objects found, nothing written", kind);
        }
        written.record(kind, count);
    }

    Ok(SaveReport {
        directory: output.to_path_buf(),
        written,
    })
}

/// Push every document under `<input>/{search,visualization,dashboard}/`,
/// each one keyed by its own `title`.
///
/// Missing or empty kind folders are skipped.
///
/// # Errors
/// - [`Error::DirectoryNotFound`] if `input` does not exist, before any request
/// - the first unreadable file, document without `title`, or failed push;
///   documents after it are not pushed
pub async fn push_all_from_disk(client: &ClusterClient, input: &Path) -> Result<LoadReport> {
    if !input.is_dir() {
        return Err(Error::DirectoryNotFound(input.to_path_buf()));
    }

    let mut pushed = ObjectCounts::default();
    for kind in ObjectKind::ALL {
        let pipeline = Pipeline::new(
            KindDirectoryReader::new(input, kind),
            IdentityTransformer::new(),
            ObjectsLoader::new(client.clone(), kind),
        );
        let count = pipeline.run().await?;
        pushed.record(kind, count);
    }

    Ok(LoadReport {
        directory: input.to_path_buf(),
        pushed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_display() {
        let mut counts = ObjectCounts::default();
        counts.record(ObjectKind::Dashboard, 2);
        counts.record(ObjectKind::Search, 1);
        assert_eq!(counts.to_string(), "search: 1, visualization: 0, dashboard: 2");
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(ObjectKind::Visualization), 0);
    }
}
