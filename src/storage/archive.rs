//! Gzip tar archives of a saved objects tree

use crate::{Error, Result};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Immediate child directories of `root`, sorted by name
pub fn child_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| Error::io("failed to list", root, e))? {
        let path = entry.map_err(|e| Error::io("failed to list", root, e))?.path();
        if path.is_dir() {
            children.push(path);
        }
    }
    children.sort();
    Ok(children)
}

/// Write every child directory of `root` into a gzip tar stream.
///
/// Each directory is added recursively under its own base name, so a tree
/// of `search/`, `visualization/` and `dashboard/` becomes three top-level
/// archive entries. Returns the names that were archived.
///
/// # Errors
/// Fails with [`Error::Transfer`] if `root` has no child directories.
pub fn pack_directories<W: Write>(root: &Path, writer: W) -> Result<Vec<String>> {
    let children = child_directories(root)?;
    if children.is_empty() {
        return Err(Error::Transfer(format!(
            "nothing to archive: {} has no folders",
            root.display()
        )));
    }

    let mut builder = tar::Builder::new(GzEncoder::new(writer, Compression::default()));
    let mut names = Vec::with_capacity(children.len());
    for child in &children {
        let name = child
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        builder
            .append_dir_all(&name, child)
            .map_err(|e| Error::io("failed to archive", child, e))?;
        log::debug!("Archived {}", child.display());
        names.push(name);
    }

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .map_err(|e| Error::io("failed to finish archive of", root, e))?;

    Ok(names)
}

/// Extract a gzip tar stream into `output`, creating it if needed.
///
/// Entries that would land outside `output` are skipped. Returns the number
/// of regular files written.
///
/// # Errors
/// Fails with [`Error::Transfer`] if the stream is not a readable gzip tar.
pub fn unpack_archive<R: Read>(reader: R, output: &Path) -> Result<usize> {
    std::fs::create_dir_all(output).map_err(|e| Error::io("failed to create", output, e))?;

    let corrupt = |e: std::io::Error| {
        Error::Transfer(format!("failed to extract archive into {}: {}", output.display(), e))
    };

    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let mut files = 0;
    for entry in archive.entries().map_err(corrupt)? {
        let mut entry = entry.map_err(corrupt)?;
        let is_file = entry.header().entry_type().is_file();
        let unpacked = entry.unpack_in(output).map_err(corrupt)?;
        if !unpacked {
            log::warn!("Skipped archive entry outside {}", output.display());
        } else if is_file {
            files += 1;
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn files_under(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        fn walk(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, Vec<u8>>) {
            for entry in std::fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(root, &path, files);
                } else {
                    let relative = path.strip_prefix(root).unwrap().to_path_buf();
                    files.insert(relative, std::fs::read(&path).unwrap());
                }
            }
        }
        let mut files = BTreeMap::new();
        walk(root, root, &mut files);
        files
    }

    fn make_tree(root: &Path) {
        for kind in ["search", "visualization", "dashboard"] {
            let folder = root.join(kind);
            std::fs::create_dir_all(&folder).unwrap();
            std::fs::write(folder.join("temp.json"), r#"{"msg": "success"}"#).unwrap();
        }
        std::fs::write(root.join("dashboard/GETDash.json"), "{\n  \"title\": \"GETDash\"\n}\n")
            .unwrap();
    }

    #[test]
    fn test_round_trip() {
        let source = TempDir::new().unwrap();
        make_tree(source.path());

        let mut bytes = Vec::new();
        let names = pack_directories(source.path(), &mut bytes).unwrap();
        assert_eq!(names, vec!["dashboard", "search", "visualization"]);

        let target = TempDir::new().unwrap();
        let files = unpack_archive(bytes.as_slice(), target.path()).unwrap();
        assert_eq!(files, 4);
        assert_eq!(files_under(source.path()), files_under(target.path()));
    }

    #[test]
    fn test_loose_files_at_root_are_not_archived() {
        let source = TempDir::new().unwrap();
        make_tree(source.path());
        std::fs::write(source.path().join("notes.txt"), "ignored").unwrap();

        let mut bytes = Vec::new();
        pack_directories(source.path(), &mut bytes).unwrap();

        let target = TempDir::new().unwrap();
        unpack_archive(bytes.as_slice(), target.path()).unwrap();
        assert!(!target.path().join("notes.txt").exists());
        assert!(target.path().join("search/temp.json").is_file());
    }

    #[test]
    fn test_empty_root_is_transfer_error() {
        let source = TempDir::new().unwrap();
        let err = pack_directories(source.path(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Transfer(_)));
    }

    #[test]
    fn test_garbage_is_transfer_error() {
        let target = TempDir::new().unwrap();
        let err = unpack_archive(&b"definitely not gzip"[..], target.path()).unwrap_err();
        assert!(matches!(err, Error::Transfer(_)));
    }
}
