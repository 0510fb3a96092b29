use clime_core::{
    BufferCoordinates, Diagnostic, DiagnosticSeverity, Extent, LineIndex, Node, Position,
    RenderRange, SourceLocation, compute_ranges,
};
use pretty_assertions::assert_eq;

const FILE: &str = "unit.c";

fn node(start: (u32, u32), end: (u32, u32)) -> Node {
    Node::new(Extent::in_file(
        FILE,
        Position::new(start.0, start.1),
        Position::new(end.0, end.1),
    ))
}

fn diagnostic(line: u32, column: u32, severity: DiagnosticSeverity, message: &str) -> Diagnostic {
    Diagnostic::new(SourceLocation::new(FILE, line, column), severity, message)
}

/// Ten lines of 20 characters each, so line `n` (0-based) starts at offset `21 * n`.
fn ten_line_buffer() -> LineIndex {
    let text = (1..=10)
        .map(|i| format!("line {i:02} {}", "x".repeat(12)))
        .collect::<Vec<_>>()
        .join("\n");
    LineIndex::from_text(&text)
}

fn line_range(line: usize) -> RenderRange {
    RenderRange::new(21 * line, 21 * line + 21)
}

#[test]
fn test_scenario_single_line_child_gives_precise_range() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20)).with_child(node((3, 5), (3, 12)));
    let diagnostics = vec![diagnostic(
        3,
        7,
        DiagnosticSeverity::Error,
        "use of undeclared identifier",
    )];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    let expected = RenderRange::new(
        buffer.point_for_line_column(2, 4),
        buffer.point_for_line_column(2, 11),
    );
    assert_eq!(expected, RenderRange::new(46, 53));
    assert_eq!(ranges.error_ranges, vec![expected]);
    assert!(ranges.warning_ranges.is_empty());
    assert_eq!(ranges.message_for_line(2), Some("use of undeclared identifier"));
}

#[test]
fn test_scenario_fileless_child_falls_back_to_full_line() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20)).with_child(Node::new(Extent::without_file(
        Position::new(3, 5),
        Position::new(3, 12),
    )));
    let diagnostics = vec![diagnostic(3, 7, DiagnosticSeverity::Error, "bad token")];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    // The root matches but spans ten lines, so the anchor line is used.
    assert_eq!(ranges.error_ranges, vec![line_range(2)]);
}

#[test]
fn test_scenario_multi_line_node_falls_back_to_anchor_line() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20)).with_child(node((3, 1), (5, 20)));
    let diagnostics = vec![diagnostic(4, 3, DiagnosticSeverity::Warning, "unused variable")];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    assert!(ranges.error_ranges.is_empty());
    assert_eq!(ranges.warning_ranges, vec![line_range(3)]);
    assert_eq!(ranges.message_for_line(3), Some("unused variable"));
}

#[test]
fn test_no_containing_node_uses_full_line() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20)).with_child(node((6, 1), (6, 8)));
    let diagnostics = vec![
        Diagnostic::new(
            SourceLocation::new("header.h", 6, 2),
            DiagnosticSeverity::Error,
            "in included file",
        ),
        diagnostic(12, 1, DiagnosticSeverity::Error, "past the end"),
    ];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    // Line 12 does not exist; it clamps to the end of the buffer, i.e. the last line.
    assert_eq!(ranges.error_ranges, vec![line_range(5), RenderRange::new(189, 209)]);
}

#[test]
fn test_severity_split_and_partition() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20));
    let diagnostics = vec![
        diagnostic(1, 1, DiagnosticSeverity::Note, "note"),
        diagnostic(2, 1, DiagnosticSeverity::Warning, "warning"),
        diagnostic(3, 1, DiagnosticSeverity::Error, "error"),
        diagnostic(4, 1, DiagnosticSeverity::Fatal, "fatal"),
        diagnostic(5, 1, DiagnosticSeverity::Warning, "warning 2"),
    ];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    assert_eq!(ranges.range_count(), diagnostics.len());
    assert_eq!(ranges.error_ranges, vec![line_range(2), line_range(3)]);
    assert_eq!(
        ranges.warning_ranges,
        vec![line_range(0), line_range(1), line_range(4)]
    );
}

#[test]
fn test_last_message_on_a_line_wins_across_severities() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20));
    let diagnostics = vec![
        diagnostic(7, 1, DiagnosticSeverity::Error, "first"),
        diagnostic(7, 9, DiagnosticSeverity::Note, "second"),
        diagnostic(8, 1, DiagnosticSeverity::Warning, "other line"),
    ];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    assert_eq!(ranges.message_for_line(6), Some("second"));
    assert_eq!(ranges.message_for_line(7), Some("other line"));
    assert_eq!(ranges.message_for_line(0), None);
    assert_eq!(ranges.message_by_line.len(), 2);
    // Both diagnostics on line 7 still produce a range.
    assert_eq!(ranges.range_count(), 3);
}

#[test]
fn test_compute_ranges_is_idempotent() {
    let buffer = ten_line_buffer();
    let tree = node((1, 1), (10, 20)).with_children([node((2, 3), (2, 9)), node((4, 1), (6, 2))]);
    let before = tree.clone();
    let diagnostics = vec![
        diagnostic(2, 4, DiagnosticSeverity::Error, "a"),
        diagnostic(5, 1, DiagnosticSeverity::Warning, "b"),
    ];

    let first = compute_ranges(&tree, &diagnostics, &buffer);
    let second = compute_ranges(&tree, &diagnostics, &buffer);

    assert_eq!(first, second);
    assert_eq!(tree, before);
}

#[test]
fn test_precise_range_clamps_to_line_end() {
    let buffer = LineIndex::from_text("int x = 1\nint y;\n");
    let tree = node((1, 1), (3, 1)).with_child(node((1, 9), (1, 40)));
    let diagnostics = vec![diagnostic(1, 10, DiagnosticSeverity::Error, "expected ';'")];

    let ranges = compute_ranges(&tree, &diagnostics, &buffer);

    assert_eq!(ranges.error_ranges, vec![RenderRange::new(8, 9)]);
}

#[test]
fn test_form_feed_and_unicode_separators_keep_compiler_lines() {
    let text = "int a;\x0c\nint b\nint c;\n";
    let buffer = LineIndex::from_text(text);
    let tree = node((1, 1), (3, 7)).with_child(node((2, 1), (2, 6)));
    let diagnostics = vec![
        diagnostic(2, 6, DiagnosticSeverity::Error, "expected ';'"),
        diagnostic(2, 3, DiagnosticSeverity::Warning, "unused variable"),
    ];
    let ranges = compute_ranges(&node((1, 1), (3, 7)), &diagnostics[..1], &buffer);
    assert_eq!(ranges.error_ranges, vec![RenderRange::new(8, 14)]);
    assert_eq!(ranges.message_for_line(1), Some("expected ';'"));

    let ranges = compute_ranges(&tree, &diagnostics[1..], &buffer);
    assert_eq!(ranges.warning_ranges, vec![RenderRange::new(8, 13)]);

    let text = "/* a\u{2028}b */\nint b\n";
    let buffer = LineIndex::from_text(text);
    let ranges = compute_ranges(&node((1, 1), (2, 6)), &diagnostics[..1], &buffer);
    assert_eq!(ranges.error_ranges, vec![RenderRange::new(10, 16)]);
}
