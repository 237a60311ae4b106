//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use crate::Result;

/// Runs one extract → transform → load pass
///
/// An empty extraction ends the pipeline before the loader is called, so a
/// loader that creates its destination lazily never creates an empty one.
///
/// # Example
/// ```no_run
/// use kibtools::etl::{IdentityTransformer, Pipeline};
/// use kibtools::objects::{ObjectKind, ObjectsExtractor};
/// use kibtools::storage::KindDirectoryWriter;
/// use kibtools::{Cluster, ClusterClient};
///
/// # async fn example() -> kibtools::Result<()> {
/// let client = ClusterClient::try_new(Cluster::default())?;
/// let pipeline = Pipeline::new(
///     ObjectsExtractor::new(client, ObjectKind::Dashboard),
///     IdentityTransformer::new(),
///     KindDirectoryWriter::new("backup", ObjectKind::Dashboard),
/// );
/// let count = pipeline.run().await?;
/// println!("Saved {} dashboards", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Run the pipeline and return the number of items loaded
    ///
    /// # Errors
    /// Returns the first error raised by any stage.
    pub async fn run(&self) -> Result<usize> {
        log::debug!("Extracting from source...");
        let items = self.extractor.extract().await?;
        log::debug!("Extracted {} items", items.len());

        if items.is_empty() {
            return Ok(0);
        }

        let transformed = self.transformer.transform_many(items)?;

        log::debug!("Loading {} items to destination...", transformed.len());
        let count = self.loader.load(transformed).await?;
        log::debug!("Loaded {} items", count);

        Ok(count)
    }
}
