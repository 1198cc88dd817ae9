//! Structural queries against slide documents.
//!
//! [`Query`] compiles namespace-agnostic local-name paths to XPath and
//! evaluates them with `sxd-xpath` over a [`crate::xml::XmlDocument`];
//! [`QuerySet`] holds the fixed expressions that locate diagram shapes and
//! connectors inside a slide.

mod path;
mod set;

pub use path::{Matches, Query, Scope, Strings};
pub use set::QuerySet;
