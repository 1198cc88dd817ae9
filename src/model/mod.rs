//! Graph model for diagrams extracted from slides.
//!
//! Nodes and edges are kept in separate maps whose keys carry distinct
//! prefixes (`"n"` and `"e"`), so the two identifier spaces never collide
//! even though both come from the same `cNvPr/@id` numbering in the slide.

mod graph;
mod shape;

pub use graph::*;
pub use shape::*;
