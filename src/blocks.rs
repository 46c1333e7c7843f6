//! Grouping the examples into heading blocks and putting the blocks in order.
//!
//! A block starts at any line that contains `##`, not only lines that start with it. This is
//! looser than the segment boundaries in [`section`](crate::section) and changes which lines
//! open blocks on real documents, so the two rules are kept separate.
//!
//! Lines before the first heading belong to no block and are dropped. [`group_blocks`] hands
//! them back so callers can see what was lost.

/// Substring that makes a line a block heading.
pub const HEADING_MARKER: &str = "##";

#[must_use]
/// Whether `line` opens a new block.
pub fn is_heading(line: &str) -> bool {
    line.contains(HEADING_MARKER)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading line and the lines under it, in their original order.
pub struct ExampleBlock {
    /// Heading first, then the body. Never empty.
    pub lines: Vec<String>,
}

impl ExampleBlock {
    #[must_use]
    /// The full heading line, markup and terminator included. Blocks sort on this.
    pub fn heading(&self) -> &str {
        &self.lines[0]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Result of splitting the examples into blocks.
pub struct Grouped {
    /// Blocks in input order.
    pub blocks: Vec<ExampleBlock>,
    /// Lines seen before the first heading.
    pub dropped: Vec<String>,
}

#[must_use]
/// Split `examples` into blocks, one per heading line.
pub fn group_blocks(examples: &[String]) -> Grouped {
    let mut grouped = Grouped::default();

    for line in examples {
        if is_heading(line) {
            grouped.blocks.push(ExampleBlock {
                lines: vec![line.clone()],
            });
        } else if let Some(block) = grouped.blocks.last_mut() {
            block.lines.push(line.clone());
        } else {
            grouped.dropped.push(line.clone());
        }
    }

    if !grouped.dropped.is_empty() {
        tracing::debug!(
            lines = grouped.dropped.len(),
            "dropping lines before the first example heading"
        );
    }

    grouped
}

#[must_use]
/// Order `blocks` by heading line. Blocks with equal headings keep their relative order.
pub fn sort_blocks(mut blocks: Vec<ExampleBlock>) -> Vec<ExampleBlock> {
    blocks.sort_by(|a, b| a.heading().cmp(b.heading()));
    blocks
}

#[must_use]
/// Flatten `blocks` back into lines.
pub fn flatten(blocks: Vec<ExampleBlock>) -> Vec<String> {
    blocks.into_iter().flat_map(|block| block.lines).collect()
}

#[must_use]
/// Reorder the examples segment block by block.
///
/// Anything before the first heading is lost, and input without any heading yields no lines.
pub fn sort_examples(examples: &[String]) -> Vec<String> {
    let grouped = group_blocks(examples);
    tracing::debug!(blocks = grouped.blocks.len(), "sorting example blocks");
    flatten(sort_blocks(grouped.blocks))
}

#[cfg(test)]
#[path = "tests/blocks.rs"]
mod tests;
