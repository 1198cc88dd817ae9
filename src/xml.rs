//! Parsed slide documents.
//!
//! A slide part is parsed once into an `sxd-document` package and then
//! queried repeatedly through [`crate::query`].

use crate::error::{Error, Result};
use sxd_document::dom::{ChildOfRoot, Document, Element};
use sxd_document::Package;

/// An owned, well-formed XML document.
pub struct XmlDocument {
    package: Package,
}

impl XmlDocument {
    /// Parse a complete document.
    ///
    /// Anything that is not well-formed XML (unbalanced tags, a missing or
    /// second root element, undeclared namespace prefixes) is an
    /// [`Error::DocumentParse`].
    pub fn parse(xml: &str) -> Result<Self> {
        let package = sxd_document::parser::parse(xml)
            .map_err(|e| Error::DocumentParse(format!("{:?}", e)))?;
        Ok(Self { package })
    }

    /// Borrow the DOM view of the package.
    pub fn as_document(&self) -> Document<'_> {
        self.package.as_document()
    }

    /// The document element.
    pub fn root_element(&self) -> Option<Element<'_>> {
        self.as_document()
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(e) => Some(e),
                _ => None,
            })
    }
}

impl std::fmt::Debug for XmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlDocument")
            .field(
                "root",
                &self.root_element().map(|e| e.name().local_part().to_string()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_slide() {
        let doc = XmlDocument::parse(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:p="urn:p"><p:cSld/></p:sld>"#,
        )
        .unwrap();
        let root = doc.root_element().unwrap();
        assert_eq!(root.name().local_part(), "sld");
        assert_eq!(root.name().namespace_uri(), Some("urn:p"));
    }

    #[test]
    fn test_mismatched_tags() {
        let err = XmlDocument::parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_unclosed_root() {
        let err = XmlDocument::parse("<sld><cSld/>").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_empty_document() {
        let err = XmlDocument::parse("").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_two_roots() {
        let err = XmlDocument::parse("<a/><b/>").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_undeclared_prefix() {
        let err = XmlDocument::parse("<p:sld><p:cSld/></p:sld>").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }
}
