//! Splitting a README into its four top-level segments.
//!
//! The document is expected to look like this, with each segment starting on the line that
//! carries its marker:
//!
//! ```text
//! Title and intro ...               <- preamble
//! <!-- RM(noparent,notop) -->       <- table of contents starts
//! * [Apple](#apple)
//! ## Apple                          <- examples start
//! ...
//! __Postscript__                    <- postscript (a single line)
//! ```
//!
//! The scan is strictly forward: each boundary is searched for from where the previous segment
//! ended, and only the start of a line counts as a match.

use crate::error::{Error, Result};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Line-prefix markers that open the table of contents, the examples and the postscript.
pub enum Boundary {
    /// `<!--` opens the table of contents.
    CommentOpen,
    /// `##` opens the examples.
    Heading,
    /// `__` opens the postscript.
    Postscript,
}

impl Boundary {
    #[must_use]
    /// Literal text a line must start with.
    pub fn marker(self) -> &'static str {
        match self {
            Self::CommentOpen => "<!--",
            Self::Heading => "##",
            Self::Postscript => "__",
        }
    }

    #[must_use]
    /// Prefix test; the marker anywhere else on the line does not count.
    pub fn matches(self, line: &str) -> bool {
        line.starts_with(self.marker())
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CommentOpen => "table of contents",
            Self::Heading => "examples",
            Self::Postscript => "postscript",
        };
        write!(f, "{name} (line starting with {:?})", self.marker())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The four segments of a README, in document order.
pub struct Sections {
    /// Everything before the table of contents.
    pub preamble: Vec<String>,
    /// From the `<!--` line up to the first `##` line.
    pub toc: Vec<String>,
    /// From the first `##` line up to the `__` line.
    pub examples: Vec<String>,
    /// The `__` line itself.
    pub postscript: String,
    /// Lines after the postscript. These are not written back.
    pub trailing: Vec<String>,
}

impl Sections {
    #[must_use]
    /// Reassemble preamble, table of contents, examples and postscript.
    ///
    /// `trailing` is left out, matching how the document has always been rewritten.
    pub fn into_lines(self) -> Vec<String> {
        let mut lines = self.preamble;
        lines.extend(self.toc);
        lines.extend(self.examples);
        lines.push(self.postscript);
        lines
    }
}

/// Index of the first line at or after `from` that starts with `boundary`'s marker.
fn find_boundary(lines: &[String], from: usize, boundary: Boundary) -> Result<usize> {
    lines
        .get(from..)
        .and_then(|rest| rest.iter().position(|line| boundary.matches(line)))
        .map(|offset| from + offset)
        .ok_or(Error::MalformedDocument { boundary })
}

/// Partition `lines` into [`Sections`].
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] naming the first marker that never appears.
pub fn split(lines: &[String]) -> Result<Sections> {
    let toc_start = find_boundary(lines, 0, Boundary::CommentOpen)?;
    let examples_start = find_boundary(lines, toc_start, Boundary::Heading)?;
    let postscript_at = find_boundary(lines, examples_start, Boundary::Postscript)?;

    let sections = Sections {
        preamble: lines[..toc_start].to_vec(),
        toc: lines[toc_start..examples_start].to_vec(),
        examples: lines[examples_start..postscript_at].to_vec(),
        postscript: lines[postscript_at].clone(),
        trailing: lines[postscript_at + 1..].to_vec(),
    };

    tracing::debug!(
        preamble = sections.preamble.len(),
        toc = sections.toc.len(),
        examples = sections.examples.len(),
        trailing = sections.trailing.len(),
        "split document"
    );

    Ok(sections)
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
