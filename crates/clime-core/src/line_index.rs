//! Buffer coordinates.
//!
//! The mapper only needs two things from a host buffer: converting a 0-based `(line, column)`
//! pair into a character offset, and expanding an offset to its full line. Hosts with their
//! own buffer model implement [`BufferCoordinates`]; [`LineIndex`] is a rope-backed
//! implementation over a text snapshot.

use crate::diagnostics::RenderRange;
use ropey::Rope;

/// Line/column ↔ offset conversion supplied by the host buffer.
///
/// All offsets are character offsets. Out-of-range inputs must clamp to the nearest valid
/// position instead of panicking.
pub trait BufferCoordinates {
    /// Character offset of a 0-based `(line, column)` pair, clamped to the buffer.
    fn point_for_line_column(&self, line: usize, column: usize) -> usize;

    /// The full line containing `offset`, including its trailing line break (if any).
    fn full_line(&self, offset: usize) -> RenderRange;

    /// Total length of the buffer, in characters.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rope-backed line index over a text snapshot.
///
/// Lines break at `\n`, `\r\n` and a lone `\r` only, matching compiler line numbers. Form
/// feeds, vertical tabs and the Unicode line/paragraph separators stay inside their line.
///
/// Rope provides O(log N) line access, so building one per recompute stays cheap even for
/// large translation units.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count (an empty buffer has one line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Character length of a line, excluding its line break. Clamps `line` to the last line.
    pub fn line_len_chars(&self, line: usize) -> usize {
        let line = line.min(self.last_line());
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        // CRLF, or a lone CR (ropey treats both as line breaks).
        if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    /// Text of a line, excluding its line break.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        Some(slice.slice(..self.line_len_chars(line)).to_string())
    }

    /// Convert a byte column within a line to a character column.
    ///
    /// Byte columns that fall inside a multi-byte character round down to that character.
    pub fn byte_column_to_char_column(&self, line: usize, byte_column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let byte_column = byte_column.min(slice.len_bytes());
        slice.byte_to_char(byte_column)
    }

    /// Convert a character offset to a 0-based `(line, column)` pair.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        (line, char_offset - self.rope.line_to_char(line))
    }

    fn last_line(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferCoordinates for LineIndex {
    fn point_for_line_column(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line) + column.min(self.line_len_chars(line))
    }

    fn full_line(&self, offset: usize) -> RenderRange {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1)
        } else {
            self.rope.len_chars()
        };
        RenderRange::new(start, end)
    }

    fn len(&self) -> usize {
        self.rope.len_chars()
    }
}
