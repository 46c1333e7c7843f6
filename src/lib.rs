//! asort: keep a README's table of contents and example sections in alphabetical order.
//!
//! The README is split into four segments (see [`section`]). The table of contents has its entry
//! lines sorted ([`toc`]) and the examples are regrouped by heading and the groups sorted
//! ([`blocks`]). Everything else is written back as it was read.
//!
//! ```no_run
//! let report = asort::sort_file(std::path::Path::new("readme.md"), false)?;
//! println!("{} example sections", report.example_headings.len());
//! # Ok::<(), asort::error::Error>(())
//! ```

pub mod blocks;
pub mod config;
pub mod document;
pub mod error;
pub mod report;
pub mod section;
pub mod toc;

use document::Document;
use error::Result;
use report::SortReport;
use std::io::{Read, Write};
use std::path::Path;

/// Sort the table of contents and examples of `lines`.
///
/// # Errors
///
/// Returns [`error::Error::MalformedDocument`] if a segment marker is missing.
pub fn sort_lines(lines: &[String]) -> Result<(Vec<String>, SortReport)> {
    let mut sections = section::split(lines)?;

    let toc_span = toc::entry_span(&sections.toc);
    let sorted_toc = toc::sort_toc(&sections.toc);

    let grouped = blocks::group_blocks(&sections.examples);
    let original_order: Vec<String> = grouped
        .blocks
        .iter()
        .map(|block| block.heading().to_string())
        .collect();
    let sorted_blocks = blocks::sort_blocks(grouped.blocks);

    let mut report = SortReport {
        toc_entries: toc_span.len(),
        toc_reordered: sorted_toc != sections.toc,
        example_headings: sorted_blocks
            .iter()
            .map(|block| block.heading().trim().to_string())
            .collect(),
        examples_reordered: sorted_blocks
            .iter()
            .map(blocks::ExampleBlock::heading)
            .ne(original_order.iter().map(String::as_str)),
        dropped_before_first_heading: grouped.dropped,
        dropped_after_postscript: std::mem::take(&mut sections.trailing),
        ..SortReport::default()
    };

    sections.toc = sorted_toc;
    sections.examples = blocks::flatten(sorted_blocks);
    let sorted = sections.into_lines();
    report.changed = sorted.as_slice() != lines;

    Ok((sorted, report))
}

/// Sort a loaded [`Document`].
///
/// # Errors
///
/// Returns [`error::Error::MalformedDocument`] if a segment marker is missing.
pub fn sort_document(doc: &Document) -> Result<(Document, SortReport)> {
    let (lines, report) = sort_lines(&doc.lines)?;
    Ok((Document::from(lines), report))
}

/// Read a document from `input`, sort it and write the result to `output`.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or the document is malformed. Nothing is
/// written when the document is malformed.
pub fn sort_reader(input: impl Read, output: impl Write) -> Result<SortReport> {
    let doc = Document::read_from(input)?;
    let (sorted, report) = sort_document(&doc)?;
    sorted.write_to(output)?;
    Ok(report)
}

/// Sort the file at `path` in place, or only compute the report when `dry_run` is set.
///
/// # Errors
///
/// Returns [`error::Error::FileAccess`] if the file cannot be read or written, and
/// [`error::Error::MalformedDocument`] if it lacks a segment marker. The file is untouched in
/// both of the latter cases.
pub fn sort_file(path: &Path, dry_run: bool) -> Result<SortReport> {
    let doc = Document::load(path)?;
    let (sorted, mut report) = sort_document(&doc)?;
    report.path = Some(path.display().to_string());

    if dry_run {
        tracing::debug!(path = %path.display(), changed = report.changed, "dry run, not writing");
    } else {
        sorted.save(path)?;
        tracing::info!(path = %path.display(), changed = report.changed, "rewrote document");
    }

    Ok(report)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
