//! Strongly typed parse-tree model.
//!
//! Compiler front-ends expose their trees through the [`SyntaxNode`] trait, so the locator and
//! mapper never depend on a particular compiler library's object model. [`Node`] is an owned
//! implementation for front-ends that build their own trees (and for tests).

use std::fmt;
use std::sync::Arc;

/// A 1-based `(line, column)` position, matching compiler conventions.
///
/// Columns count Unicode scalar values within the line. Ordering is lexicographic: line
/// first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position inside a (possibly unknown) file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// File name as reported by the front-end. `None` for synthetic/internal locations.
    pub file: Option<Arc<str>>,
    /// Position within the file.
    pub position: Position,
}

impl SourceLocation {
    /// Create a location inside `file`.
    pub fn new(file: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.into()),
            position: Position::new(line, column),
        }
    }

    /// Create a location with no file identity.
    pub fn without_file(line: u32, column: u32) -> Self {
        Self {
            file: None,
            position: Position::new(line, column),
        }
    }

    /// The file name, if known.
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_name() {
            Some(file) => write!(f, "{file}:{}", self.position),
            None => write!(f, "<unknown>:{}", self.position),
        }
    }
}

/// The source span of a node, from `start` to `end` (both inclusive as far as containment is
/// concerned).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Start of the span. Its `file` is the extent's file identity.
    pub start: SourceLocation,
    /// End of the span.
    pub end: SourceLocation,
}

impl Extent {
    /// Create an extent from two locations.
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create an extent within a single file.
    pub fn in_file(file: impl Into<Arc<str>>, start: Position, end: Position) -> Self {
        let file = file.into();
        Self {
            start: SourceLocation {
                file: Some(Arc::clone(&file)),
                position: start,
            },
            end: SourceLocation {
                file: Some(file),
                position: end,
            },
        }
    }

    /// Create an extent with no file identity (synthetic nodes).
    pub fn without_file(start: Position, end: Position) -> Self {
        Self {
            start: SourceLocation {
                file: None,
                position: start,
            },
            end: SourceLocation {
                file: None,
                position: end,
            },
        }
    }

    /// The file the extent starts in.
    pub fn file_name(&self) -> Option<&str> {
        self.start.file_name()
    }

    /// Returns `true` if the extent starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.position.line == self.end.position.line
    }
}

/// A handle to a node in an immutable parse tree.
///
/// Handles are cheap values (a reference, or a front-end's copyable node type). Walking a tree
/// through this trait never mutates it.
pub trait SyntaxNode: Sized {
    /// Iterator over a node's children, in source order.
    type Children: Iterator<Item = Self>;

    /// The node's source span.
    fn extent(&self) -> Extent;

    /// The node's direct children, in source order.
    fn children(&self) -> Self::Children;
}

/// An owned syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Source span of this node.
    pub extent: Extent,
    /// Child nodes, in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            children: Vec::new(),
        }
    }

    /// Builder-style helper to append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style helper to append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

impl<'a> SyntaxNode for &'a Node {
    type Children = std::slice::Iter<'a, Node>;

    fn extent(&self) -> Extent {
        self.extent.clone()
    }

    fn children(&self) -> Self::Children {
        let node: &'a Node = *self;
        node.children.iter()
    }
}
