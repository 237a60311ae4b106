//! Saved objects extractor
//!
//! Reads one kind of saved object via GET /{index}/{kind}/_search

use super::{ObjectKind, SavedObject};
use crate::client::ClusterClient;
use crate::etl::Extractor;
use crate::Result;

/// Extractor for one kind of saved object
///
/// # Example
/// ```no_run
/// use kibtools::etl::Extractor;
/// use kibtools::objects::{ObjectKind, ObjectsExtractor};
/// use kibtools::{Cluster, ClusterClient};
///
/// # async fn example() -> kibtools::Result<()> {
/// let client = ClusterClient::try_new(Cluster::default())?;
/// let dashboards = ObjectsExtractor::new(client, ObjectKind::Dashboard)
///     .extract()
///     .await?;
/// for dashboard in &dashboards {
///     println!("{} -> {:?}", dashboard.name, dashboard.visualizations());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ObjectsExtractor {
    client: ClusterClient,
    kind: ObjectKind,
}

impl ObjectsExtractor {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `client` - Cluster client bound to the saved objects index
    /// * `kind` - Which kind of saved object to read
    pub fn new(client: ClusterClient, kind: ObjectKind) -> Self {
        Self { client, kind }
    }
}

impl Extractor for ObjectsExtractor {
    type Item = SavedObject;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        let hits = self.client.get_objects(self.kind).await?;
        let objects = SavedObject::from_hits(self.kind, hits)?;

        log::info!("Extracted {} {} object(s)", objects.len(), self.kind);

        Ok(objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Cluster;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn extractor_for(server: &MockServer, kind: ObjectKind) -> ObjectsExtractor {
        let address = server.address();
        let client = ClusterClient::try_new(Cluster {
            host: address.ip().to_string(),
            port: address.port(),
            ..Cluster::default()
        })
        .unwrap();
        ObjectsExtractor::new(client, kind)
    }

    #[tokio::test]
    async fn test_extract_dashboards() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/.kibana/dashboard/_search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hits": {"hits": [
                    {"_id": "GETDash", "_source": {
                        "title": "GETDash",
                        "panelsJSON": "[{\"id\":\"GETViz\",\"type\":\"visualization\"}]"
                    }},
                    {"_id": "GETDash2", "_source": {"title": "GETDash2", "panelsJSON": "[]"}}
                ]}
            })))
            .mount(&server)
            .await;

        let extractor = extractor_for(&server, ObjectKind::Dashboard).await;
        let objects = extractor.extract().await.unwrap();

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].name, "GETDash");
        assert_eq!(objects[0].visualizations(), ["GETViz".to_string()]);
        assert!(objects[1].visualizations().is_empty());
    }

    #[tokio::test]
    async fn test_extract_propagates_flatten_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/.kibana/visualization/_search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hits": {"hits": [{"_id": "v", "_source": {"title": "v"}}]}
            })))
            .mount(&server)
            .await;

        let extractor = extractor_for(&server, ObjectKind::Visualization).await;
        let err = extractor.extract().await.unwrap_err();
        assert!(err.is_parse());
    }
}
