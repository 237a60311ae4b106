//! Extractor trait for pulling items out of a source

use crate::Result;

/// Extracts a batch of items from a source such as the `.kibana` index or a
/// directory of JSON files.
///
/// # Example
/// ```no_run
/// use kibtools::etl::Extractor;
/// use kibtools::Result;
///
/// struct Fixed(Vec<u32>);
///
/// impl Extractor for Fixed {
///     type Item = u32;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract every item from the source
    ///
    /// # Errors
    /// Network, parsing and I/O failures are returned as-is.
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
