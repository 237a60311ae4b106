//! Local and remote storage of saved objects
//!
//! This module handles:
//! - the on-disk tree, one folder per kind
//! - gzip tar archives of that tree
//! - object stores the archive is uploaded to and downloaded from

mod archive;
mod directory;
mod object_store;
mod transfer;

pub use archive::{child_directories, pack_directories, unpack_archive};
pub use directory::{KindDirectoryReader, KindDirectoryWriter, StoredObject, file_name_for};
pub use object_store::{ObjectStore, S3Config, S3Store};
pub use transfer::{ARCHIVE_KEY, DownloadReport, UploadReport, pull_from_store, push_to_store};
