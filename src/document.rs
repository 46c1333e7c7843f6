//! Whole-file line buffer that round-trips byte for byte.
//!
//! The document is held as an ordered list of lines, each still carrying its terminator, so that
//! concatenating them gives back exactly what was read. Nothing here knows about sections.

use crate::error::{Error, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered lines of a text file, terminators included.
pub struct Document {
    /// Lines in file order. Only the last one may lack a trailing `\n`.
    pub lines: Vec<String>,
}

impl Document {
    #[must_use]
    /// Split `text` into lines, keeping `\n` (and any preceding `\r`) on each.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read everything from `reader` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the bytes are not valid UTF-8.
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    /// Load the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the file is missing, unreadable or not UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
        let doc = Self::parse(&text);
        tracing::debug!(path = %path.display(), lines = doc.lines.len(), "loaded document");
        Ok(doc)
    }

    /// Write every line, verbatim, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Overwrite the file at `path` with this document.
    ///
    /// The file is truncated and rewritten in place, so a crash part way through can leave it
    /// incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| Error::file_access(path, e))
    }

    #[must_use]
    /// Number of lines held.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// True when the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
