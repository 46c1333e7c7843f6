//! Machine-readable summary of one sort.
//!
//! The report is what `--report` prints. It is also the only place the lines lost to the legacy
//! rules are visible, since the rewrite itself drops them without comment.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// What a sort did to a document.
pub struct SortReport {
    /// File that was sorted, when there was one.
    pub path: Option<String>,
    /// Entries in the sorted run of the table of contents.
    pub toc_entries: usize,
    /// Whether any entry changed position.
    pub toc_reordered: bool,
    /// Example headings (trimmed) in their new order.
    pub example_headings: Vec<String>,
    /// Whether any block changed position.
    pub examples_reordered: bool,
    /// Lines in the examples segment before the first heading, not written back.
    pub dropped_before_first_heading: Vec<String>,
    /// Lines after the postscript line, not written back.
    pub dropped_after_postscript: Vec<String>,
    /// Whether the output differs from the input at all.
    pub changed: bool,
}

impl SortReport {
    #[must_use]
    /// Total number of lines that were not written back.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_before_first_heading.len() + self.dropped_after_postscript.len()
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
