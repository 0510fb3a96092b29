//! Compiler front-end interfaces.
//!
//! A front-end turns source text into a [`CompiledUnit`]: a parse tree plus the diagnostics
//! produced while building it. The checker only talks to front-ends through these traits, so
//! any compiler library (or a Tree-sitter grammar, see `clime-treesitter`) can be plugged in.

use crate::diagnostics::Diagnostic;
use crate::syntax::SyntaxNode;

/// The in-memory result of parsing one source buffer.
pub trait CompiledUnit {
    /// Node handle type, borrowing from the unit.
    type Node<'a>: SyntaxNode + Clone
    where
        Self: 'a;

    /// Root of the unit's parse tree.
    fn root(&self) -> Self::Node<'_>;

    /// Diagnostics produced by the last parse or reparse, in compiler order.
    fn diagnostics(&self) -> &[Diagnostic];
}

/// A compiler front-end capable of parsing and reparsing source buffers.
pub trait CompilerFrontEnd {
    /// The compiled unit type produced by this front-end.
    type Unit: CompiledUnit;
    /// The error type returned when parsing fails outright.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse `text` as the contents of `path`.
    fn parse(&mut self, path: &str, text: &str) -> Result<Self::Unit, Self::Error>;

    /// Re-parse an existing unit against the current (possibly unsaved) buffer text.
    ///
    /// The unit's tree is rebuilt wholesale; handles into the old tree must not outlive this
    /// call, which the borrow on `unit` enforces.
    fn reparse(&mut self, unit: &mut Self::Unit, text: &str) -> Result<(), Self::Error>;
}
