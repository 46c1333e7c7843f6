//! Alphabetising the table of contents.

use std::ops::Range;

/// Every table of contents entry starts with this.
pub const ENTRY_MARKER: &str = "* [";

#[must_use]
/// Whether `line` is a table of contents entry.
pub fn is_entry(line: &str) -> bool {
    line.starts_with(ENTRY_MARKER)
}

#[must_use]
/// Range of the first contiguous run of entries in `toc`.
///
/// Empty (and positioned at the end) when there are no entries.
pub fn entry_span(toc: &[String]) -> Range<usize> {
    let start = toc.iter().position(|line| is_entry(line)).unwrap_or(toc.len());
    let len = toc[start..].iter().take_while(|line| is_entry(line)).count();
    start..start + len
}

#[must_use]
/// Sort the entry run of `toc` by full line text, leaving the lines around it in place.
///
/// Only the first contiguous run is sorted; entries after a break stay where they are.
pub fn sort_toc(toc: &[String]) -> Vec<String> {
    let span = entry_span(toc);
    let mut sorted = toc.to_vec();
    sorted[span.clone()].sort();
    tracing::debug!(entries = span.len(), "sorted table of contents");
    sorted
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
