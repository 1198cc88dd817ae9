//! Nodes, edges, and the keyed collections holding them.

use super::Shape;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Prefix of every node identifier.
pub const NODE_PREFIX: &str = "n";

/// Prefix of every edge identifier.
pub const EDGE_PREFIX: &str = "e";

/// Build a node identifier from a raw document id.
///
/// An empty raw id yields the bare prefix.
pub fn node_id(raw: &str) -> String {
    format!("{}{}", NODE_PREFIX, raw)
}

/// Build an edge identifier from a raw document id.
pub fn edge_id(raw: &str) -> String {
    format!("{}{}", EDGE_PREFIX, raw)
}

/// A diagram node: a labelled shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    label: String,
    shape: Shape,
}

impl Node {
    /// Create a node.
    pub fn new(label: impl Into<String>, shape: Shape) -> Self {
        Self {
            label: label.into(),
            shape,
        }
    }

    /// The node's label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node's geometry.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node{{Label:{:?}, Shape:{}}}", self.label, self.shape)
    }
}

/// A directed connector between two node identifiers.
///
/// Endpoints are not checked against any [`NodeMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    src: String,
    dst: String,
}

impl Edge {
    /// Create an edge.
    pub fn new(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }

    /// Source node identifier.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Destination node identifier.
    pub fn dst(&self) -> &str {
        &self.dst
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge{{Src:{}, Dst:{}}}", self.src, self.dst)
    }
}

macro_rules! keyed_map {
    ($(#[$meta:meta])* $name:ident, $value:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(BTreeMap<String, $value>);

        impl $name {
            /// Create an empty map.
            pub fn new() -> Self {
                Self::default()
            }

            /// Look up an entry by identifier.
            pub fn get(&self, id: &str) -> Option<&$value> {
                self.0.get(id)
            }

            /// Check whether an identifier is present.
            pub fn contains(&self, id: &str) -> bool {
                self.0.contains_key(id)
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the map is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterate `(identifier, value)` pairs in identifier order.
            ///
            /// Each call starts a fresh pass; stop consuming whenever you like.
            pub fn iter(&self) -> impl Iterator<Item = (&str, &$value)> {
                self.0.iter().map(|(k, v)| (k.as_str(), v))
            }

            /// Iterate identifiers in order.
            pub fn ids(&self) -> impl Iterator<Item = &str> {
                self.0.keys().map(String::as_str)
            }

            /// Insert or replace an entry, returning the replaced value.
            pub(crate) fn insert(&mut self, id: String, value: $value) -> Option<$value> {
                self.0.insert(id, value)
            }
        }

        impl IntoIterator for $name {
            type Item = (String, $value);
            type IntoIter = btree_map::IntoIter<String, $value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl FromIterator<(String, $value)> for $name {
            fn from_iter<I: IntoIterator<Item = (String, $value)>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

keyed_map!(
    /// Nodes keyed by `"n" + raw id`.
    NodeMap,
    Node
);

keyed_map!(
    /// Edges keyed by `"e" + raw id`.
    EdgeMap,
    Edge
);

/// The nodes and edges extracted from one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes by identifier
    pub nodes: NodeMap,
    /// Edges by identifier
    pub edges: EdgeMap,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up an edge.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Whether neither nodes nor edges were found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges with at least one endpoint missing from the node map.
    pub fn dangling_edges(&self) -> Vec<(&str, &Edge)> {
        self.edges
            .iter()
            .filter(|(_, e)| !self.nodes.contains(e.src()) || !self.nodes.contains(e.dst()))
            .collect()
    }
}
