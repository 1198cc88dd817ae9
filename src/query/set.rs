//! The fixed query set for PresentationML slides.

use super::Query;
use crate::error::Result;

// Shapes (nodes), relative to the document.
const NODE: &str = "/sld/cSld/spTree/sp";
// Relative to a matched shape.
const NODE_ID: &str = "nvSpPr/cNvPr/@id";
const NODE_SHAPE: &str = "spPr/prstGeom/@prst";
const NODE_LABEL: &str = "txBody/p/r/t";

// Connectors (edges), relative to the document.
const EDGE: &str = "/sld/cSld/spTree/cxnSp";
// Relative to a matched connector.
const EDGE_ID: &str = "nvCxnSpPr/cNvPr/@id";
const EDGE_SOURCE: &str = "nvCxnSpPr/cNvCxnSpPr/stCxn/@id";
const EDGE_TARGET: &str = "nvCxnSpPr/cNvCxnSpPr/endCxn/@id";

/// Compiled queries describing where nodes, edges and their fields live.
#[derive(Debug)]
pub struct QuerySet {
    /// Shape elements
    pub node: Query,
    /// Shape id attribute
    pub node_id: Query,
    /// Preset geometry attribute
    pub node_shape: Query,
    /// Text runs making up the label
    pub node_label: Query,
    /// Connector elements
    pub edge: Query,
    /// Connector id attribute
    pub edge_id: Query,
    /// Start connection id attribute
    pub edge_source: Query,
    /// End connection id attribute
    pub edge_target: Query,
}

impl QuerySet {
    /// Compile the built-in expressions.
    pub fn compile() -> Result<Self> {
        Ok(Self {
            node: Query::compile(NODE)?,
            node_id: Query::compile(NODE_ID)?,
            node_shape: Query::compile(NODE_SHAPE)?,
            node_label: Query::compile(NODE_LABEL)?,
            edge: Query::compile(EDGE)?,
            edge_id: Query::compile(EDGE_ID)?,
            edge_source: Query::compile(EDGE_SOURCE)?,
            edge_target: Query::compile(EDGE_TARGET)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_queries_compile() {
        let set = QuerySet::compile().unwrap();
        assert!(set.node.is_absolute());
        assert!(set.edge.is_absolute());
        assert!(!set.node_label.is_absolute());
        assert_eq!(set.node_shape.attribute(), Some("prst"));
        assert_eq!(set.edge_target.attribute(), Some("id"));
    }
}
