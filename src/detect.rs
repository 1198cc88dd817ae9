//! Container kind detection.
//!
//! Extraction never requires a container to be a genuine presentation: any
//! ZIP archive is accepted and simply yields an empty graph when the slide
//! entry is absent. Detection is for callers that want to tell the user why.

use crate::container::PresentationContainer;
use crate::error::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Content type for the PPTX presentation part.
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// What kind of archive a container turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A PowerPoint presentation (.pptx)
    Presentation,
    /// Some other ZIP archive
    Archive,
}

impl ContainerKind {
    /// Returns a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Presentation => "PowerPoint Presentation",
            ContainerKind::Archive => "ZIP Archive",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Classify an opened container.
///
/// Looks at `[Content_Types].xml` first and falls back to the presence of a
/// `ppt/` folder.
pub fn detect_kind(container: &PresentationContainer) -> ContainerKind {
    if let Ok(content_types) = container.read_xml("[Content_Types].xml") {
        if matches!(declares_presentation(&content_types), Ok(true)) {
            return ContainerKind::Presentation;
        }
    }

    if container.list_files_with_prefix("ppt/").is_empty() {
        ContainerKind::Archive
    } else {
        ContainerKind::Presentation
    }
}

/// Whether a content types part overrides some part as a presentation.
fn declares_presentation(content_types: &str) -> Result<bool> {
    let mut reader = Reader::from_str(content_types);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Override" => {
                for attr in e.attributes().flatten() {
                    if attr.key.local_name().as_ref() == b"ContentType"
                        && attr.unescape_value()? == PPTX_CONTENT_TYPE
                    {
                        return Ok(true);
                    }
                }
            }
            Event::Eof => return Ok(false),
            _ => {}
        }
        buf.clear();
    }
}

/// Shorthand for `detect_kind(container) == ContainerKind::Presentation`.
pub fn is_presentation(container: &PresentationContainer) -> bool {
    detect_kind(container) == ContainerKind::Presentation
}
