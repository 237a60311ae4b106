//! Elasticsearch cluster client and authentication.
//!
//! [`ClusterClient`] talks to the index holding the saved objects (usually
//! `.kibana`); [`Auth`] selects the credentials it sends.

mod auth;
mod cluster;

pub use auth::Auth;
pub use cluster::{Cluster, ClusterClient};
