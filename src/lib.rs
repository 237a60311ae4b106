//! kibtools
//!
//! Save Kibana dashboards, visualizations and searches from the cluster's
//! saved objects index to disk (optionally archived to S3), and load them back.

pub mod backup;
pub mod client;
pub mod cli;
pub mod error;
pub mod etl;
pub mod objects;
pub mod storage;

// Re-exports for convenience
pub use backup::{LoadReport, ObjectCounts, SaveReport, push_all_from_disk, save_all_types};
pub use client::{Auth, Cluster, ClusterClient};
pub use error::{Error, Result};
pub use objects::{ObjectKind, SavedObject};
pub use storage::{ARCHIVE_KEY, ObjectStore, S3Config, S3Store, pull_from_store, push_to_store};
