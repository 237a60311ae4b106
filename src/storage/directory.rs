//! Directory-based object storage
//!
//! Each kind lives in its own folder under a root: `<root>/<kind>/<name>.json`,
//! holding nothing but the object's source document.

use crate::etl::{Extractor, Loader};
use crate::objects::{ObjectKind, SavedObject};
use crate::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A document read back from disk, with the file it came from
#[derive(Clone, Debug, PartialEq)]
pub struct StoredObject {
    pub path: PathBuf,
    pub source: Value,
}

/// File name for an object name: `<name>.json`.
///
/// `%`, path separators and NUL are percent-escaped, and a bare `.` or `..`
/// is written as `%2E`/`%2E%2E`, so a name can never point outside its kind
/// folder and two names never share a file. Anything else is kept verbatim.
pub fn file_name_for(name: &str) -> String {
    let stem = match name {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => {
            let mut stem = String::with_capacity(name.len());
            for c in name.chars() {
                match c {
                    '%' => stem.push_str("%25"),
                    '/' => stem.push_str("%2F"),
                    '\\' => stem.push_str("%5C"),
                    '\0' => stem.push_str("%00"),
                    c => stem.push(c),
                }
            }
            stem
        }
    };
    format!("{}.json", stem)
}

/// Read every document in one kind folder
pub struct KindDirectoryReader {
    path: PathBuf,
    kind: ObjectKind,
}

impl KindDirectoryReader {
    pub fn new(root: impl AsRef<Path>, kind: ObjectKind) -> Self {
        Self {
            path: root.as_ref().join(kind.as_str()),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every file in the folder as JSON, in file name order.
    ///
    /// A missing folder reads as empty. Subdirectories are ignored.
    pub fn read_all(&self) -> Result<Vec<StoredObject>> {
        if !self.path.is_dir() {
            log::warn!("No {} folder at {}, skipping", self.kind, self.path.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.path)
            .map_err(|e| Error::io("failed to list", &self.path, e))?
        {
            let entry = entry.map_err(|e| Error::io("failed to list", &self.path, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let mut objects = Vec::with_capacity(files.len());
        for path in files {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| Error::io("failed to read", &path, e))?;
            let source: Value = serde_json::from_str(&content)
                .map_err(|e| Error::parse(path.display().to_string(), e))?;
            objects.push(StoredObject { path, source });
        }

        log::debug!("Read {} file(s) from {}", objects.len(), self.path.display());
        Ok(objects)
    }
}

impl Extractor for KindDirectoryReader {
    type Item = StoredObject;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read_all()
    }
}

/// Write saved objects into one kind folder.
///
/// The folder is only created once there is something to write into it.
pub struct KindDirectoryWriter {
    path: PathBuf,
}

impl KindDirectoryWriter {
    pub fn new(root: impl AsRef<Path>, kind: ObjectKind) -> Self {
        Self {
            path: root.as_ref().join(kind.as_str()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write each object's source to `<name>.json`, replacing existing files
    pub fn write_all(&self, items: &[SavedObject]) -> Result<usize> {
        if items.is_empty() {
            return Ok(0);
        }

        std::fs::create_dir_all(&self.path)
            .map_err(|e| Error::io("failed to create", &self.path, e))?;

        for item in items {
            let path = self.path.join(file_name_for(&item.name));
            let mut json = serde_json::to_string_pretty(&item.source)
                .map_err(|e| Error::parse(format!("{} '{}'", item.kind, item.name), e))?;
            json.push('\n');
            std::fs::write(&path, json).map_err(|e| Error::io("failed to write", &path, e))?;
            log::debug!("Wrote {}", path.display());
        }

        Ok(items.len())
    }
}

impl Loader for KindDirectoryWriter {
    type Item = SavedObject;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        self.write_all(&items)
    }
}
