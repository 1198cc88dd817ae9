//! # graph-pptx
//!
//! Extract a directed graph drawn on a PowerPoint slide.
//!
//! Shapes with a recognized preset geometry (rectangles, ellipses, flowchart
//! symbols, ...) become nodes labelled with their text; connectors glued to
//! shapes become edges. Only one slide is read, `ppt/slides/slide1.xml` by
//! default.
//!
//! ## Quick Start
//!
//! ```no_run
//! use graph_pptx::parse_file;
//!
//! let graph = parse_file("diagram.pptx")?;
//! for (id, node) in graph.nodes.iter() {
//!     println!("{} {:?} ({})", id, node.label(), node.shape());
//! }
//! for (id, edge) in graph.edges.iter() {
//!     println!("{} {} -> {}", id, edge.src(), edge.dst());
//! }
//! # Ok::<(), graph_pptx::Error>(())
//! ```
//!
//! ## Identifiers
//!
//! Node keys are `"n"` followed by the shape's `cNvPr/@id`; edge keys are
//! `"e"` followed by the connector's id. Edge endpoints use node keys. A
//! missing id falls back to the bare prefix.

pub mod container;
pub mod detect;
pub mod error;
pub mod model;
pub mod pptx;
pub mod query;
pub mod render;
pub mod xml;

// Re-exports
pub use container::PresentationContainer;
pub use detect::{detect_kind, is_presentation, ContainerKind};
pub use error::{Error, Result};
pub use model::{Edge, EdgeMap, Graph, Node, NodeMap, Shape};
pub use pptx::{ExtractOptions, GraphExtractor};

use std::path::Path;

/// Extract the graph from a presentation file.
///
/// # Example
///
/// ```no_run
/// use graph_pptx::parse_file;
///
/// let graph = parse_file("diagram.pptx")?;
/// println!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
/// # Ok::<(), graph_pptx::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Graph> {
    let mut extractor = GraphExtractor::new()?;
    extractor.parse(path)?;
    Ok(extractor.into_graph())
}

/// Extract the graph from an in-memory presentation.
///
/// # Example
///
/// ```no_run
/// use graph_pptx::parse_bytes;
///
/// let data = std::fs::read("diagram.pptx")?;
/// let graph = parse_bytes(&data)?;
/// # Ok::<(), graph_pptx::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Graph> {
    let mut extractor = GraphExtractor::new()?;
    extractor.parse_bytes(data.to_vec())?;
    Ok(extractor.into_graph())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("test-files/does-not-exist.pptx").unwrap_err();
        assert!(matches!(err, Error::ContainerOpen(_)));
    }

    #[test]
    fn test_parse_bytes_garbage() {
        let err = parse_bytes(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, Error::ContainerOpen(_)));
    }
}
