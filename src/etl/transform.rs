//! Transformer trait for per-item conversion between stages

use crate::Result;

/// Transforms items between extraction and loading
pub trait Transformer: Send + Sync {
    /// Input item type
    type Input: Send;

    /// Output item type after transformation
    type Output: Send;

    /// Transform a single item
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform a batch, stopping at the first failure
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}

/// Passes items through unchanged
///
/// Saved objects are stored and pushed exactly as the cluster returned them,
/// so both directions run with this transformer.
pub struct IdentityTransformer<T> {
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for IdentityTransformer<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> IdentityTransformer<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Send> Transformer for IdentityTransformer<T> {
    type Input = T;
    type Output = T;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_transformer() {
        let transformer = IdentityTransformer::<serde_json::Value>::new();
        let input = vec![json!({"title": "GET"}), json!({"title": "GETViz"})];
        let output = transformer.transform_many(input.clone()).unwrap();
        assert_eq!(input, output);
    }
}
