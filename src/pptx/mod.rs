//! Graph extraction from PowerPoint slides.
//!
//! Shapes (`p:sp`) with a recognized preset geometry become nodes; connectors
//! (`p:cxnSp`) become edges between the shapes they are glued to.

mod extractor;
mod options;

pub use extractor::GraphExtractor;
pub use options::{ExtractOptions, TARGET_ENTRY};
