//! Kibana saved objects stored in the cluster index
//!
//! Three kinds are handled: searches, visualizations and dashboards. Each is
//! fetched through the index's `_search` endpoint, flattened into a
//! [`SavedObject`] and written back one document at a time.

mod extractor;
mod hits;
mod kind;
mod loader;
mod record;

pub use extractor::ObjectsExtractor;
pub use hits::{lookup, take_hits};
pub use kind::ObjectKind;
pub use loader::ObjectsLoader;
pub use record::{References, SavedObject, parse_visualizations};
