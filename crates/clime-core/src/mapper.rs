//! Diagnostic range mapper.
//!
//! Compilers anchor a diagnostic at a single point, which usually only marks the first column
//! of the offending token. The mapper widens that point to the tightest syntax node around it
//! when the node fits on one line, and to the whole anchor line otherwise. Nodes that span
//! several lines (an unclosed block, say) would paint squiggles across the whole region, so
//! they collapse to the line the compiler pointed at.

use crate::diagnostics::{Diagnostic, DiagnosticRanges, RenderRange};
use crate::line_index::BufferCoordinates;
use crate::locator::find_enclosing_node;
use crate::syntax::{Position, SyntaxNode};

/// Map `diagnostics` onto renderable ranges using the parse tree rooted at `root`.
///
/// Each diagnostic contributes exactly one range, to `error_ranges` for `Error`/`Fatal` and to
/// `warning_ranges` otherwise, and one `message_by_line` entry at its 0-based anchor line.
/// Later diagnostics on the same line overwrite earlier messages regardless of severity.
///
/// Locations outside the buffer clamp to the nearest valid position; this function never
/// fails and never mutates the tree.
pub fn compute_ranges<N, B>(root: N, diagnostics: &[Diagnostic], buffer: &B) -> DiagnosticRanges
where
    N: SyntaxNode + Clone,
    B: BufferCoordinates + ?Sized,
{
    let mut out = DiagnosticRanges::default();

    for diagnostic in diagnostics {
        let range = diagnostic_range(root.clone(), diagnostic, buffer);

        if diagnostic.severity.is_error() {
            out.error_ranges.push(range);
        } else {
            out.warning_ranges.push(range);
        }

        out.message_by_line.insert(
            zero_based(diagnostic.location.line()),
            diagnostic.message.clone(),
        );
    }

    out
}

/// The range a single diagnostic renders as.
pub fn diagnostic_range<N, B>(root: N, diagnostic: &Diagnostic, buffer: &B) -> RenderRange
where
    N: SyntaxNode,
    B: BufferCoordinates + ?Sized,
{
    if let Some(node) = find_enclosing_node(root, &diagnostic.location) {
        let extent = node.extent();
        if extent.is_single_line() {
            let start = offset_for(buffer, extent.start.position);
            let end = offset_for(buffer, extent.end.position);
            return RenderRange::new(start, end.max(start));
        }
    }

    log::trace!(
        "diagnostic at {} falls back to its full line",
        diagnostic.location
    );
    buffer.full_line(offset_for(buffer, diagnostic.location.position))
}

fn offset_for<B: BufferCoordinates + ?Sized>(buffer: &B, position: Position) -> usize {
    buffer.point_for_line_column(zero_based(position.line), zero_based(position.column))
}

fn zero_based(value: u32) -> usize {
    value.saturating_sub(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticSeverity;
    use crate::line_index::LineIndex;
    use crate::syntax::{Extent, Node, SourceLocation};

    #[test]
    fn test_empty_diagnostics() {
        let root = Node::new(Extent::in_file(
            "a.c",
            Position::new(1, 1),
            Position::new(1, 1),
        ));
        let ranges = compute_ranges(&root, &[], &LineIndex::new());
        assert!(ranges.is_empty());
        assert!(ranges.message_by_line.is_empty());
    }

    #[test]
    fn test_zero_line_and_column_clamp() {
        let root = Node::new(Extent::in_file(
            "a.c",
            Position::new(1, 1),
            Position::new(2, 1),
        ));
        let buffer = LineIndex::from_text("int x\nint y;\n");
        let diagnostic = Diagnostic::new(
            SourceLocation::new("b.c", 0, 0),
            DiagnosticSeverity::Error,
            "expected ';'",
        );

        let ranges = compute_ranges(&root, &[diagnostic], &buffer);
        assert_eq!(ranges.error_ranges, vec![RenderRange::new(0, 6)]);
        assert_eq!(ranges.message_for_line(0), Some("expected ';'"));
    }

    #[test]
    fn test_inverted_extent_falls_back_to_line() {
        let root = Node::new(Extent::in_file(
            "a.c",
            Position::new(1, 9),
            Position::new(1, 3),
        ));
        let buffer = LineIndex::from_text("int value;\n");
        let diagnostic = Diagnostic::new(
            SourceLocation::new("a.c", 1, 9),
            DiagnosticSeverity::Warning,
            "odd extent",
        );

        // The node does not contain its own start (end < start), so the line is used.
        let range = diagnostic_range(&root, &diagnostic, &buffer);
        assert_eq!(range, RenderRange::new(0, 11));
    }
}
