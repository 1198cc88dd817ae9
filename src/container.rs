//! ZIP container abstraction for presentation files.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Decode the bytes of an XML part.
///
/// UTF-8 is expected; a byte order mark selects UTF-16 instead. Bytes that
/// do not decode are an [`Error::DocumentParse`], never replaced.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM[..]) {
        return decode_utf16(rest, u16::from_le_bytes).map(declare_utf8);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM[..]) {
        return decode_utf16(rest, u16::from_be_bytes).map(declare_utf8);
    }

    let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::DocumentParse(e.to_string()))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::DocumentParse(e.to_string()))
}

/// Rewrite a UTF-16 encoding declaration once the text is held as UTF-8.
fn declare_utf8(content: String) -> String {
    let end = match content.find("?>") {
        Some(end) if content.starts_with("<?xml") => end,
        _ => return content,
    };
    let (decl, rest) = content.split_at(end);
    let decl = decl.replace("UTF-16", "UTF-8").replace("utf-16", "UTF-8");
    format!("{}{}", decl, rest)
}

/// Presentation container over a ZIP archive.
///
/// The whole archive is held in memory; entry streams are opened on demand
/// and closed before each read method returns.
pub struct PresentationContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl PresentationContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use graph_pptx::container::PresentationContainer;
    ///
    /// let container = PresentationContainer::open("diagram.pptx")?;
    /// # Ok::<(), graph_pptx::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::ContainerOpen(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Error::ContainerOpen(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Scan the entry listing for an exact name match.
    pub fn find_entry(&self, name: &str) -> Option<String> {
        let archive = self.archive.borrow();
        let found = archive.file_names().find(|n| *n == name).map(String::from);
        found
    }

    /// Check if an entry exists in the archive.
    pub fn exists(&self, name: &str) -> bool {
        self.find_entry(name).is_some()
    }

    /// List all entries in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// List entries matching a prefix.
    pub fn list_files_with_prefix(&self, prefix: &str) -> Vec<String> {
        let archive = self.archive.borrow();
        archive
            .file_names()
            .filter(|n| n.starts_with(prefix))
            .map(String::from)
            .collect()
    }

    /// Read an XML entry from the archive as a string.
    ///
    /// Failing to open or read the entry stream is an
    /// [`Error::EntryOpen`]; undecodable text is an [`Error::DocumentParse`].
    pub fn read_xml(&self, name: &str) -> Result<String> {
        let bytes = self.read_binary(name)?;
        decode_xml_bytes(&bytes)
    }

    /// Read an entry's raw bytes.
    pub fn read_binary(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|e| Error::EntryOpen(format!("{}: {}", name, e)))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::EntryOpen(format!("{}: {}", name, e)))?;
        Ok(data)
    }
}

impl std::fmt::Debug for PresentationContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}
