//! Plain listing of a graph, one entry per line.

use crate::model::Graph;
use std::fmt::Write;

/// Render a graph as a human-readable listing.
///
/// ```text
/// # nodes
/// n5 = Node{Label:"StartNode", Shape:rect}
/// # edges
/// e10 = Edge{Src:n5, Dst:n5}
/// ```
pub fn to_dump(graph: &Graph) -> String {
    let mut out = String::new();

    out.push_str("# nodes\n");
    for (id, node) in graph.nodes.iter() {
        let _ = writeln!(out, "{} = {}", id, node);
    }

    out.push_str("# edges\n");
    for (id, edge) in graph.edges.iter() {
        let _ = writeln!(out, "{} = {}", id, edge);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node, Shape};

    #[test]
    fn test_dump_empty() {
        assert_eq!(to_dump(&Graph::new()), "# nodes\n# edges\n");
    }

    #[test]
    fn test_dump_listing() {
        let graph = Graph {
            nodes: [("n5".to_string(), Node::new("StartNode", Shape::Rect))]
                .into_iter()
                .collect(),
            edges: [("e10".to_string(), Edge::new("n5", "n5"))]
                .into_iter()
                .collect(),
        };

        assert_eq!(
            to_dump(&graph),
            "# nodes\nn5 = Node{Label:\"StartNode\", Shape:rect}\n# edges\ne10 = Edge{Src:n5, Dst:n5}\n"
        );
    }
}
