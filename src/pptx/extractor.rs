//! Graph extraction pipeline.

use super::ExtractOptions;
use crate::container::PresentationContainer;
use crate::error::Result;
use crate::model::{edge_id, node_id, Edge, EdgeMap, Graph, Node, NodeMap, Shape};
use crate::query::QuerySet;
use crate::render;
use crate::xml::XmlDocument;
use std::path::Path;
use sxd_document::dom::Element;
use tracing::{debug, info, warn};

/// Extracts nodes and edges from a single slide.
///
/// An extractor owns its compiled queries and the graph it populates, so
/// independent extractors can run side by side. Results accumulate across
/// `parse*` calls until [`reset`](Self::reset) is called.
///
/// # Example
///
/// ```no_run
/// use graph_pptx::GraphExtractor;
///
/// let mut extractor = GraphExtractor::new()?;
/// extractor.parse("diagram.pptx")?;
/// for (id, node) in extractor.graph().nodes.iter() {
///     println!("{} = {}", id, node);
/// }
/// # Ok::<(), graph_pptx::Error>(())
/// ```
#[derive(Debug)]
pub struct GraphExtractor {
    queries: QuerySet,
    options: ExtractOptions,
    graph: Graph,
}

impl GraphExtractor {
    /// Create an extractor with default options and an empty graph.
    pub fn new() -> Result<Self> {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with the given options.
    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            queries: QuerySet::compile()?,
            options,
            graph: Graph::new(),
        })
    }

    /// Options in effect.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Discard everything extracted so far.
    pub fn reset(&mut self) {
        self.graph = Graph::new();
    }

    /// Open the presentation at `path` and extract its target slide.
    ///
    /// Fails only when the container cannot be opened, the slide entry
    /// cannot be read, or the slide is not well-formed XML. A container
    /// without the slide entry extracts nothing and succeeds. Entries
    /// added before a failure are kept.
    pub fn parse(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let container = PresentationContainer::open(path)?;
        self.parse_container(&container)
    }

    /// Like [`parse`](Self::parse), for an in-memory archive.
    pub fn parse_bytes(&mut self, data: Vec<u8>) -> Result<()> {
        let container = PresentationContainer::from_bytes(data)?;
        self.parse_container(&container)
    }

    /// Extract from an already opened container.
    pub fn parse_container(&mut self, container: &PresentationContainer) -> Result<()> {
        let wanted = self.options.target_entry.as_str();
        let Some(entry) = container.find_entry(wanted) else {
            debug!(entry = wanted, "target entry not found, nothing to extract");
            return Ok(());
        };

        let xml = container.read_xml(&entry)?;
        let doc = XmlDocument::parse(&xml)?;
        self.extract(&doc)?;

        info!(
            entry = %entry,
            nodes = self.graph.nodes.len(),
            edges = self.graph.edges.len(),
            "extracted graph"
        );
        Ok(())
    }

    /// Run the node and edge passes over a parsed slide.
    ///
    /// Shapes without a recognized geometry are skipped and missing ids
    /// default to the bare identifier prefix. Only a failing query
    /// evaluation is an error.
    pub fn extract(&mut self, doc: &XmlDocument) -> Result<()> {
        let Self { queries, graph, .. } = self;

        for shape in queries.node.all_matches(doc)? {
            extract_node(queries, shape, &mut graph.nodes)?;
        }
        for connector in queries.edge.all_matches(doc)? {
            extract_edge(queries, connector, &mut graph.edges)?;
        }
        Ok(())
    }

    /// The graph extracted so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Nodes extracted so far.
    pub fn nodes(&self) -> &NodeMap {
        &self.graph.nodes
    }

    /// Edges extracted so far.
    pub fn edges(&self) -> &EdgeMap {
        &self.graph.edges
    }

    /// Take ownership of the extracted graph.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Human-readable listing of the current graph, for debugging.
    pub fn dump(&self) -> String {
        render::to_dump(&self.graph)
    }
}

fn extract_node(queries: &QuerySet, shape: Element<'_>, nodes: &mut NodeMap) -> Result<()> {
    let raw_id = queries.node_id.first_string(shape)?;
    if raw_id.is_none() {
        debug!("shape without id, keyed by bare prefix");
    }
    let id = node_id(raw_id.as_deref().unwrap_or_default());

    // Each run is trimmed on its own before joining
    let label: String = queries
        .node_label
        .strings(shape)?
        .map(|run| run.trim().to_string())
        .collect();

    let geometry = queries.node_shape.first_string(shape)?;
    let Some(kind) = geometry.as_deref().map(str::trim).and_then(Shape::parse) else {
        debug!(id = %id, geometry = ?geometry, "dropping shape with unrecognized geometry");
        return Ok(());
    };

    if nodes.contains(&id) {
        warn!(id = %id, "duplicate node identifier, replacing earlier node");
    }
    nodes.insert(id, Node::new(label, kind));
    Ok(())
}

fn extract_edge(queries: &QuerySet, connector: Element<'_>, edges: &mut EdgeMap) -> Result<()> {
    let raw_id = queries.edge_id.first_string(connector)?;
    let src = queries.edge_source.first_string(connector)?;
    let dst = queries.edge_target.first_string(connector)?;
    if raw_id.is_none() || src.is_none() || dst.is_none() {
        debug!(
            id = ?raw_id,
            src = ?src,
            dst = ?dst,
            "connector missing attributes, defaulting to bare prefix"
        );
    }

    let id = edge_id(raw_id.as_deref().unwrap_or_default());
    let edge = Edge::new(
        node_id(src.as_deref().unwrap_or_default()),
        node_id(dst.as_deref().unwrap_or_default()),
    );

    if edges.contains(&id) {
        warn!(id = %id, "duplicate edge identifier, replacing earlier edge");
    }
    edges.insert(id, edge);
    Ok(())
}
