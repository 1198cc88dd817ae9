//! Node shape vocabulary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Text rendered for [`Shape::Unknown`]. Not a DrawingML preset name, so it
/// never collides with a vocabulary entry.
pub const UNKNOWN_SHAPE: &str = "unknown";

/// Preset geometry of a diagram node.
///
/// Variants map one-to-one onto DrawingML `prstGeom/@prst` values. New
/// presets are appended; the text of existing entries never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    Rect,
    RoundRect,
    Ellipse,
    Triangle,
    RtTriangle,
    Diamond,
    Parallelogram,
    Trapezoid,
    Pentagon,
    Hexagon,
    Octagon,
    Plus,
    Can,
    Cube,
    Plaque,
    Donut,
    FlowChartProcess,
    FlowChartAlternateProcess,
    FlowChartDecision,
    FlowChartInputOutput,
    FlowChartPredefinedProcess,
    FlowChartDocument,
    FlowChartTerminator,
    FlowChartConnector,
    FlowChartMagneticDisk,
    /// Sentinel; never produced by [`Shape::parse`].
    #[default]
    Unknown,
}

impl Shape {
    /// Every recognized shape, in vocabulary order. Excludes [`Shape::Unknown`].
    pub const VOCABULARY: &'static [Shape] = &[
        Shape::Rect,
        Shape::RoundRect,
        Shape::Ellipse,
        Shape::Triangle,
        Shape::RtTriangle,
        Shape::Diamond,
        Shape::Parallelogram,
        Shape::Trapezoid,
        Shape::Pentagon,
        Shape::Hexagon,
        Shape::Octagon,
        Shape::Plus,
        Shape::Can,
        Shape::Cube,
        Shape::Plaque,
        Shape::Donut,
        Shape::FlowChartProcess,
        Shape::FlowChartAlternateProcess,
        Shape::FlowChartDecision,
        Shape::FlowChartInputOutput,
        Shape::FlowChartPredefinedProcess,
        Shape::FlowChartDocument,
        Shape::FlowChartTerminator,
        Shape::FlowChartConnector,
        Shape::FlowChartMagneticDisk,
    ];

    /// Look up a preset name. The match is exact; trimming is up to the
    /// caller.
    pub fn parse(raw: &str) -> Option<Shape> {
        Self::VOCABULARY.iter().copied().find(|s| s.as_str() == raw)
    }

    /// The preset name this shape was parsed from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Rect => "rect",
            Shape::RoundRect => "roundRect",
            Shape::Ellipse => "ellipse",
            Shape::Triangle => "triangle",
            Shape::RtTriangle => "rtTriangle",
            Shape::Diamond => "diamond",
            Shape::Parallelogram => "parallelogram",
            Shape::Trapezoid => "trapezoid",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
            Shape::Octagon => "octagon",
            Shape::Plus => "plus",
            Shape::Can => "can",
            Shape::Cube => "cube",
            Shape::Plaque => "plaque",
            Shape::Donut => "donut",
            Shape::FlowChartProcess => "flowChartProcess",
            Shape::FlowChartAlternateProcess => "flowChartAlternateProcess",
            Shape::FlowChartDecision => "flowChartDecision",
            Shape::FlowChartInputOutput => "flowChartInputOutput",
            Shape::FlowChartPredefinedProcess => "flowChartPredefinedProcess",
            Shape::FlowChartDocument => "flowChartDocument",
            Shape::FlowChartTerminator => "flowChartTerminator",
            Shape::FlowChartConnector => "flowChartConnector",
            Shape::FlowChartMagneticDisk => "flowChartMagneticDisk",
            Shape::Unknown => UNKNOWN_SHAPE,
        }
    }

    /// Whether this is a vocabulary entry rather than the sentinel.
    pub fn is_known(&self) -> bool {
        *self != Shape::Unknown
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Shape::from_str`] for text outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized shape: {0}")]
pub struct UnrecognizedShape(pub String);

impl FromStr for Shape {
    type Err = UnrecognizedShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::parse(s).ok_or_else(|| UnrecognizedShape(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_roundtrip() {
        for shape in Shape::VOCABULARY {
            assert_eq!(Shape::parse(shape.as_str()), Some(*shape));
        }
    }

    #[test]
    fn test_vocabulary_names_are_distinct() {
        let mut names: Vec<&str> = Shape::VOCABULARY.iter().map(Shape::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Shape::VOCABULARY.len());
        assert!(!names.contains(&UNKNOWN_SHAPE));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(Shape::parse("star"), None);
        assert_eq!(Shape::parse(" rect"), None);
        assert_eq!(Shape::parse("RECT"), None);
        assert_eq!(Shape::parse(UNKNOWN_SHAPE), None);
        assert_eq!(
            "star".parse::<Shape>(),
            Err(UnrecognizedShape("star".to_string()))
        );
    }

    #[test]
    fn test_unknown_sentinel() {
        assert_eq!(Shape::default(), Shape::Unknown);
        assert_eq!(Shape::Unknown.to_string(), "unknown");
        assert!(!Shape::Unknown.is_known());
        assert!(Shape::Hexagon.is_known());
    }

    #[test]
    fn test_serde_uses_preset_names() {
        for shape in Shape::VOCABULARY {
            let json = serde_json::to_string(shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.as_str()));
        }
        let parsed: Shape = serde_json::from_str("\"flowChartDecision\"").unwrap();
        assert_eq!(parsed, Shape::FlowChartDecision);
    }
}
