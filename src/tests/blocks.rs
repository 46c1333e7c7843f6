use super::{group_blocks, is_heading, sort_blocks, sort_examples, ExampleBlock};
use pretty_assertions::assert_eq;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[test]
fn test_blocks_sorted_by_heading() {
    let examples = lines(&["## Zebra\n", "body z\n", "## Apple\n", "body a\n"]);

    assert_eq!(
        sort_examples(&examples),
        lines(&["## Apple\n", "body a\n", "## Zebra\n", "body z\n"])
    );
}

#[test]
fn test_lines_before_first_heading_are_dropped() {
    let examples = lines(&["stray line\n", "## Only\n", "x\n"]);

    assert_eq!(sort_examples(&examples), lines(&["## Only\n", "x\n"]));

    let grouped = group_blocks(&examples);
    assert_eq!(grouped.dropped, lines(&["stray line\n"]));
    assert_eq!(grouped.blocks.len(), 1);
}

#[test]
fn test_no_headings_drops_everything() {
    let examples = lines(&["some text\n", "\n", "more text\n"]);

    assert!(sort_examples(&examples).is_empty());
    assert_eq!(group_blocks(&examples).dropped, examples);
}

#[test]
fn test_block_bodies_travel_with_their_heading() {
    let examples = lines(&[
        "## Reduce\n",
        "r1\n",
        "\n",
        "r2\n",
        "## Map\n",
        "## Filter\n",
        "f1\n",
    ]);

    let sorted = sort_examples(&examples);

    assert_eq!(
        sorted,
        lines(&[
            "## Filter\n",
            "f1\n",
            "## Map\n",
            "## Reduce\n",
            "r1\n",
            "\n",
            "r2\n",
        ])
    );
    // Same blocks, different order
    let mut before = group_blocks(&examples).blocks;
    let mut after = group_blocks(&sorted).blocks;
    before.sort_by(|a, b| a.lines.cmp(&b.lines));
    after.sort_by(|a, b| a.lines.cmp(&b.lines));
    assert_eq!(before, after);
}

#[test]
fn test_heading_matches_anywhere_in_line() {
    assert!(is_heading("## Title\n"));
    assert!(is_heading("### Sub\n"));
    assert!(is_heading("see ## here\n"));
    assert!(!is_heading("# Title\n"));

    // An inline "##" opens a block, even mid-body
    let examples = lines(&["## B\n", "text with ## inside\n", "## A\n"]);
    assert_eq!(
        sort_examples(&examples),
        lines(&["## A\n", "## B\n", "text with ## inside\n"])
    );
}

#[test]
fn test_sort_key_is_full_heading_line() {
    // "## " sorts before "###", so a level-3 heading with an earlier title still comes later
    let examples = lines(&["### Apple\n", "a\n", "## Zebra\n", "z\n"]);

    assert_eq!(
        sort_examples(&examples),
        lines(&["## Zebra\n", "z\n", "### Apple\n", "a\n"])
    );
}

#[test]
fn test_equal_headings_keep_input_order() {
    let blocks = vec![
        ExampleBlock {
            lines: lines(&["## Same\n", "first\n"]),
        },
        ExampleBlock {
            lines: lines(&["## Aardvark\n"]),
        },
        ExampleBlock {
            lines: lines(&["## Same\n", "second\n"]),
        },
    ];

    let sorted = sort_blocks(blocks);

    assert_eq!(sorted[0].heading(), "## Aardvark\n");
    assert_eq!(sorted[1].lines[1], "first\n");
    assert_eq!(sorted[2].lines[1], "second\n");
}

#[test]
fn test_empty_examples() {
    assert!(sort_examples(&[]).is_empty());
    assert_eq!(group_blocks(&[]), super::Grouped::default());
}
