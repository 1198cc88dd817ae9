//! Output rendering for extracted graphs.
//!
//! # Example
//!
//! ```no_run
//! use graph_pptx::{parse_file, render::*};
//!
//! let graph = parse_file("diagram.pptx")?;
//!
//! // Debug listing
//! print!("{}", to_dump(&graph));
//!
//! // Render to JSON
//! let json = to_json(&graph, JsonFormat::Pretty)?;
//! # Ok::<(), graph_pptx::Error>(())
//! ```

mod dump;
mod json;

pub use dump::to_dump;
pub use json::{to_json, JsonFormat};
