//! Compiler diagnostics and the ranges derived from them.
//!
//! Diagnostics arrive from a compiler front-end anchored at a single 1-based source location.
//! The mapper turns them into [`RenderRange`]s in buffer-offset space, which hosts draw as
//! squiggly underlines or gutter markers.

use crate::syntax::SourceLocation;
use std::collections::BTreeMap;

/// A half-open character-offset range (`start..end`) in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`) from the start of the buffer.
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`) from the start of the buffer.
    pub end: usize,
}

impl RenderRange {
    /// Create a new render range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Diagnostic severity levels, ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    /// Informational note attached to another diagnostic.
    Note,
    /// Warning diagnostics.
    Warning,
    /// Error diagnostics.
    Error,
    /// Fatal errors; the compiler stopped processing the unit.
    Fatal,
}

impl DiagnosticSeverity {
    /// Returns `true` for severities that land in the error bucket (`Error`, `Fatal`).
    pub fn is_error(self) -> bool {
        self > DiagnosticSeverity::Warning
    }
}

/// A single compiler diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the compiler anchored the diagnostic.
    pub location: SourceLocation,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Diagnostic message, as spelled by the compiler.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        location: SourceLocation,
        severity: DiagnosticSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            severity,
            message: message.into(),
        }
    }
}

/// The renderable result of mapping one unit's diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticRanges {
    /// Ranges for `Error`/`Fatal` diagnostics, in input order.
    pub error_ranges: Vec<RenderRange>,
    /// Ranges for `Note`/`Warning` diagnostics, in input order.
    pub warning_ranges: Vec<RenderRange>,
    /// Message of the last diagnostic anchored on each 0-based line.
    ///
    /// Severities are not distinguished here: a warning that comes after an error on the same
    /// line replaces the error's message.
    pub message_by_line: BTreeMap<usize, String>,
}

impl DiagnosticRanges {
    /// Look up the status message for a 0-based line.
    pub fn message_for_line(&self, line: usize) -> Option<&str> {
        self.message_by_line.get(&line).map(String::as_str)
    }

    /// Total number of ranges across both buckets.
    pub fn range_count(&self) -> usize {
        self.error_ranges.len() + self.warning_ranges.len()
    }

    /// Returns `true` if no diagnostics were mapped.
    pub fn is_empty(&self) -> bool {
        self.range_count() == 0
    }
}
