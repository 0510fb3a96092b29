#![warn(missing_docs)]
//! `clime-treesitter` - Tree-sitter front-end for `clime-core`.
//!
//! This crate parses buffers with a caller-supplied Tree-sitter grammar (typically
//! `tree-sitter-c` or `tree-sitter-cpp`) and exposes:
//!
//! - the parse tree, through `clime_core::SyntaxNode`
//! - syntax-error diagnostics for `ERROR` and `MISSING` nodes
//!
//! so the checker can run without a native compiler library installed.

mod front_end;

pub use front_end::{
    SourceText, TreeSitterError, TreeSitterFrontEnd, TreeSitterFrontEndConfig, TreeSitterNode,
    TreeSitterUnit,
};
