//! Extraction options.

/// Slide entry read when no other is configured.
pub const TARGET_ENTRY: &str = "ppt/slides/slide1.xml";

/// Options for [`GraphExtractor`](super::GraphExtractor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Archive entry holding the slide to extract from
    pub target_entry: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            target_entry: TARGET_ENTRY.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a different slide entry.
    pub fn with_target_entry(mut self, entry: impl Into<String>) -> Self {
        self.target_entry = entry.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        assert_eq!(ExtractOptions::new().target_entry, "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_builder() {
        let options = ExtractOptions::new().with_target_entry("ppt/slides/slide3.xml");
        assert_eq!(options.target_entry, "ppt/slides/slide3.xml");
    }
}
