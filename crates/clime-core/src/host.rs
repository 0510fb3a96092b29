//! Host editor interfaces.
//!
//! The checker never renders anything itself. It hands ranges and status text to the host
//! through [`EditorView`], and the host decides colors, icons and draw styles.

use crate::diagnostics::RenderRange;
use std::fmt;

/// Stable identity of a host buffer/view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u64);

impl BufferId {
    /// Create a new buffer id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// Which bucket a set of regions belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Error/fatal diagnostics.
    Error,
    /// Warning/note diagnostics.
    Warning,
}

impl RegionKind {
    /// Region key under which this bucket is published.
    pub fn region_key(self) -> &'static str {
        match self {
            Self::Error => ERROR_REGION_KEY,
            Self::Warning => WARNING_REGION_KEY,
        }
    }
}

/// Region key for error ranges.
pub const ERROR_REGION_KEY: &str = "clime_errors";
/// Region key for warning ranges.
pub const WARNING_REGION_KEY: &str = "clime_warnings";
/// Status key for the message of the diagnostic under the cursor.
pub const STATUS_KEY: &str = "clime_error";

/// A host editor view onto one buffer.
pub trait EditorView {
    /// Identity of the underlying buffer.
    fn buffer_id(&self) -> BufferId;

    /// File the buffer is backed by, if it has been saved at least once.
    fn file_name(&self) -> Option<&str>;

    /// Full current text, including unsaved edits.
    fn text(&self) -> String;

    /// 0-based line of the primary cursor.
    fn cursor_line(&self) -> usize;

    /// Replace the regions stored under `key`.
    fn add_regions(&mut self, key: &str, ranges: &[RenderRange], kind: RegionKind);

    /// Remove the regions stored under `key`.
    fn erase_regions(&mut self, key: &str);

    /// Show `message` in the status bar under `key`.
    fn set_status(&mut self, key: &str, message: &str);

    /// Clear the status bar entry under `key`.
    fn erase_status(&mut self, key: &str);
}
