//! Compiled path expressions over an [`XmlDocument`].
//!
//! Expressions are written as plain local-name paths and compiled to XPath,
//! so `p:sp` and `sp` in any namespace both match the step `sp`.

use crate::error::{Error, Result};
use crate::xml::XmlDocument;
use sxd_document::dom::Element;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value, XPath};

/// Where a query is evaluated from.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'d> {
    /// The document node; its only element child is the root element.
    Document(&'d XmlDocument),
    /// A previously matched element.
    Element(Element<'d>),
}

impl<'d> From<&'d XmlDocument> for Scope<'d> {
    fn from(doc: &'d XmlDocument) -> Self {
        Scope::Document(doc)
    }
}

impl<'d> From<Element<'d>> for Scope<'d> {
    fn from(element: Element<'d>) -> Self {
        Scope::Element(element)
    }
}

/// A compiled path expression.
///
/// Grammar: element steps separated by `/`, optionally ending in an
/// `@attribute` step. A leading `/` anchors the path at the document root.
/// Steps compare against local names; `*` matches any element.
///
/// ```
/// use graph_pptx::query::Query;
/// use graph_pptx::xml::XmlDocument;
///
/// let doc = XmlDocument::parse(r#"<sld><sp id="1"/><sp id="2"/></sld>"#)?;
/// let ids = Query::compile("/sld/sp/@id")?;
/// let all: Vec<String> = ids.strings(&doc)?.collect();
/// assert_eq!(all, ["1", "2"]);
/// # Ok::<(), graph_pptx::Error>(())
/// ```
pub struct Query {
    expression: String,
    absolute: bool,
    attribute: Option<String>,
    xpath: XPath,
}

impl Query {
    /// Compile an expression.
    pub fn compile(expression: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::Query {
            expression: expression.to_string(),
            reason: reason.to_string(),
        };

        let (absolute, body) = match expression.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, expression),
        };
        if body.is_empty() {
            return Err(invalid("empty path"));
        }

        let parts: Vec<&str> = body.split('/').collect();
        let mut steps = Vec::with_capacity(parts.len());
        let mut attribute = None;

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(invalid("empty step"));
            }
            if let Some(name) = part.strip_prefix('@') {
                if i + 1 != parts.len() {
                    return Err(invalid("attribute step must be last"));
                }
                if !is_name(name) {
                    return Err(invalid("invalid attribute name"));
                }
                steps.push(format!("@*[local-name()='{}']", name));
                attribute = Some(name.to_string());
            } else if *part == "*" {
                steps.push("*".to_string());
            } else if is_name(part) {
                steps.push(format!("*[local-name()='{}']", part));
            } else {
                return Err(invalid("invalid element name"));
            }
        }

        if absolute && attribute.is_some() && steps.len() == 1 {
            return Err(invalid("absolute path needs an element step"));
        }

        let mut source = steps.join("/");
        if absolute {
            source.insert(0, '/');
        }
        let xpath = match Factory::new().build(&source) {
            Ok(Some(xpath)) => xpath,
            Ok(None) => return Err(invalid("empty path")),
            Err(e) => return Err(invalid(&e.to_string())),
        };

        Ok(Self {
            expression: expression.to_string(),
            absolute,
            attribute,
            xpath,
        })
    }

    /// Whether the path is anchored at the document root.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// The trailing attribute step, if any.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Every node selected by the expression, in document order.
    fn evaluate<'d>(&self, scope: Scope<'d>) -> Result<Vec<Node<'d>>> {
        let start: Node<'d> = match scope {
            Scope::Document(doc) => doc.as_document().root().into(),
            // The document root is not reachable from an element scope
            Scope::Element(_) if self.absolute => return Ok(Vec::new()),
            Scope::Element(e) => e.into(),
        };

        let context = Context::new();
        match self.xpath.evaluate(&context, start) {
            Ok(Value::Nodeset(nodes)) => Ok(nodes.document_order()),
            Ok(_) => Ok(Vec::new()),
            Err(e) => Err(Error::Query {
                expression: self.expression.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Every element matched by the element steps, in document order.
    ///
    /// Absolute paths evaluated against an element match nothing.
    pub fn all_matches<'d>(&self, scope: impl Into<Scope<'d>>) -> Result<Matches<'d>> {
        Ok(Matches {
            nodes: self.evaluate(scope.into())?.into_iter(),
        })
    }

    /// Every matched value in document order: attribute values for an
    /// attribute path, element text otherwise.
    pub fn strings<'d>(&self, scope: impl Into<Scope<'d>>) -> Result<Strings<'d>> {
        Ok(Strings {
            nodes: self.evaluate(scope.into())?.into_iter(),
        })
    }

    /// The first matched value, if any.
    pub fn first_string<'d>(&self, scope: impl Into<Scope<'d>>) -> Result<Option<String>> {
        Ok(self.strings(scope)?.next())
    }
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Query").field(&self.expression).finish()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression)
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

/// Elements matched by a [`Query`].
#[derive(Debug)]
pub struct Matches<'d> {
    nodes: std::vec::IntoIter<Node<'d>>,
}

impl<'d> Iterator for Matches<'d> {
    type Item = Element<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.by_ref().find_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }
}

/// Values matched by a [`Query`].
#[derive(Debug)]
pub struct Strings<'d> {
    nodes: std::vec::IntoIter<Node<'d>>,
}

impl<'d> Iterator for Strings<'d> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.string_value())
    }
}
