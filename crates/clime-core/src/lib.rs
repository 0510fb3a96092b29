#![warn(missing_docs)]
//! Clime Core - compiler diagnostics mapped onto editor ranges
//!
//! # Overview
//!
//! `clime-core` is the headless engine of a C/C++ syntax-checking editor plugin. A compiler
//! front-end parses a buffer into a tree and a list of diagnostics; this crate decides which
//! characters of the buffer each diagnostic should underline, and which message to show in
//! the status bar for each line.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SyntaxChecker (per-buffer state, host I/O) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Diagnostic Range Mapper                    │  ← Ranges + line messages
//! ├─────────────────────────────────────────────┤
//! │  Parse-Tree Locator                         │  ← Tightest enclosing node
//! ├─────────────────────────────────────────────┤
//! │  SyntaxNode / BufferCoordinates traits      │  ← Front-end + host seams
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use clime_core::{
//!     Diagnostic, DiagnosticSeverity, Extent, LineIndex, Node, Position, RenderRange,
//!     SourceLocation, compute_ranges,
//! };
//!
//! let text = "int main(void) {\n    return 0\n}\n";
//! let root = Node::new(Extent::in_file("main.c", Position::new(1, 1), Position::new(3, 2)))
//!     .with_child(Node::new(Extent::in_file(
//!         "main.c",
//!         Position::new(2, 5),
//!         Position::new(2, 13),
//!     )));
//!
//! let diagnostics = vec![Diagnostic::new(
//!     SourceLocation::new("main.c", 2, 13),
//!     DiagnosticSeverity::Error,
//!     "expected ';' after return statement",
//! )];
//!
//! let ranges = compute_ranges(&root, &diagnostics, &LineIndex::from_text(text));
//! assert_eq!(ranges.error_ranges, vec![RenderRange::new(21, 29)]);
//! assert_eq!(ranges.message_for_line(1), Some("expected ';' after return statement"));
//! ```
//!
//! # Module Description
//!
//! - [`syntax`] - positions, extents and the [`SyntaxNode`] tree interface
//! - [`locator`] - finding the tightest node around a location
//! - [`mapper`] - turning diagnostics into error/warning ranges
//! - [`line_index`] - line/column ↔ offset conversion
//! - [`front_end`] - compiler front-end interfaces
//! - [`host`] - host editor view interface
//! - [`checker`] - per-buffer state management
//! - [`settings`] - plugin configuration

pub mod checker;
pub mod diagnostics;
pub mod front_end;
pub mod host;
pub mod line_index;
pub mod locator;
pub mod mapper;
pub mod settings;
pub mod syntax;

pub use checker::{CheckerError, CompiledUnitView, SyntaxChecker};
pub use diagnostics::{Diagnostic, DiagnosticRanges, DiagnosticSeverity, RenderRange};
pub use front_end::{CompiledUnit, CompilerFrontEnd};
pub use host::{
    BufferId, ERROR_REGION_KEY, EditorView, RegionKind, STATUS_KEY, WARNING_REGION_KEY,
};
pub use line_index::{BufferCoordinates, LineIndex};
pub use locator::{contains, find_enclosing_node};
pub use mapper::{compute_ranges, diagnostic_range};
pub use settings::{Settings, SettingsError};
pub use syntax::{Extent, Node, Position, SourceLocation, SyntaxNode};
