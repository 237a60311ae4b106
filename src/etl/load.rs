//! Loader trait for writing items to a destination

use crate::Result;

/// Loads a batch of items into a destination such as a kind directory on
/// disk or the `.kibana` index.
///
/// # Example
/// ```no_run
/// use kibtools::etl::Loader;
/// use kibtools::Result;
///
/// struct Counter;
///
/// impl Loader for Counter {
///     type Item = String;
///
///     async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
///         Ok(items.len())
///     }
/// }
/// ```
pub trait Loader: Send + Sync {
    /// The type of items to load
    type Item: Send;

    /// Load items to the destination
    ///
    /// Returns the number of items loaded. Loading stops at the first item
    /// that fails.
    fn load(&self, items: Vec<Self::Item>) -> impl std::future::Future<Output = Result<usize>> + Send;
}
