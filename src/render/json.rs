//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Graph;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a Graph to JSON.
pub fn to_json(graph: &Graph, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(graph)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(graph)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node, Shape};

    fn sample() -> Graph {
        Graph {
            nodes: [("n1".to_string(), Node::new("Decide", Shape::FlowChartDecision))]
                .into_iter()
                .collect(),
            edges: [("e2".to_string(), Edge::new("n1", "n3"))]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"label\": \"Decide\""));
        assert!(json.contains("\"shape\": \"flowChartDecision\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"e2\":{\"src\":\"n1\",\"dst\":\"n3\"}"));
    }

    #[test]
    fn test_graph_roundtrip() {
        let graph = sample();
        let json = to_json(&graph, JsonFormat::default()).unwrap();
        let parsed: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, graph);
    }
}
