//! Extract, transform and load abstractions
//!
//! Every direction kibtools moves objects in (cluster → disk, disk → cluster)
//! is a [`Pipeline`] of one extractor, one transformer and one loader.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::{IdentityTransformer, Transformer};
