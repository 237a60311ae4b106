//! Saved objects loader
//!
//! Writes documents back via POST /{index}/{kind}/{title}

use super::{ObjectKind, lookup};
use crate::client::ClusterClient;
use crate::etl::Loader;
use crate::storage::StoredObject;
use crate::{Error, Result};
use serde_json::Value;

/// Loader for one kind of saved object
///
/// Each document is posted under its own `title`, not under the name of the
/// file it was read from. Documents are pushed in order and the first
/// failure stops the batch.
pub struct ObjectsLoader {
    client: ClusterClient,
    kind: ObjectKind,
}

impl ObjectsLoader {
    /// Create a new loader
    ///
    /// # Arguments
    /// * `client` - Cluster client bound to the saved objects index
    /// * `kind` - Document type the objects are posted as
    pub fn new(client: ClusterClient, kind: ObjectKind) -> Self {
        Self { client, kind }
    }

    /// Push one document
    async fn push(&self, object: &StoredObject) -> Result<()> {
        let title = lookup(&object.source, &["title"])
            .and_then(Value::as_str)
            .ok_or_else(|| Error::missing_field(object.path.display().to_string(), "title"))?;

        let response = self
            .client
            .push_object(self.kind, title, &object.source)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { url, status, body });
        }

        log::debug!("Pushed {} '{}' ({})", self.kind, title, status);
        Ok(())
    }
}

impl Loader for ObjectsLoader {
    type Item = StoredObject;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        for item in &items {
            self.push(item).await?;
        }

        log::info!("Pushed {} {} object(s)", items.len(), self.kind);
        Ok(items.len())
    }
}
