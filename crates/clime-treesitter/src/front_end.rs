use clime_core::{
    CompiledUnit, CompilerFrontEnd, Diagnostic, DiagnosticSeverity, Extent, LineIndex, Position,
    SourceLocation, SyntaxNode,
};
use std::sync::Arc;
use thiserror::Error;
use tree_sitter::{Parser, Point, Tree};

/// Longest snippet of offending text quoted in an "unexpected" diagnostic.
const MAX_SNIPPET_CHARS: usize = 32;

/// Errors produced by [`TreeSitterFrontEnd`].
#[derive(Debug, Error)]
pub enum TreeSitterError {
    #[error("tree-sitter language error: {0}")]
    /// Setting the Tree-sitter language failed (usually an ABI version mismatch).
    Language(String),

    #[error("tree-sitter parse was cancelled")]
    /// The parser returned no tree.
    ParseCancelled,
}

/// Configuration for [`TreeSitterFrontEnd`].
#[derive(Debug, Clone)]
pub struct TreeSitterFrontEndConfig {
    /// Tree-sitter language.
    pub language: tree_sitter::Language,
    /// Only walk named nodes; punctuation and keywords are skipped by the locator.
    pub named_nodes_only: bool,
}

impl TreeSitterFrontEndConfig {
    /// Create a config for `language`.
    ///
    /// By default every node (named or anonymous) is visible to the locator, so a diagnostic on
    /// a `;` can highlight just that token.
    pub fn new(language: tree_sitter::Language) -> Self {
        Self {
            language,
            named_nodes_only: false,
        }
    }

    /// Control whether anonymous nodes are skipped.
    pub fn with_named_nodes_only(mut self, named_only: bool) -> Self {
        self.named_nodes_only = named_only;
        self
    }
}

/// Text snapshot a unit was parsed from, with coordinate helpers.
#[derive(Debug)]
pub struct SourceText {
    file: Arc<str>,
    text: String,
    line_index: LineIndex,
}

impl SourceText {
    fn new(file: &str, text: &str) -> Self {
        Self {
            file: Arc::from(file),
            text: text.to_string(),
            line_index: LineIndex::from_text(text),
        }
    }

    /// File name the text belongs to.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The parsed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Convert a Tree-sitter point (0-based row, byte column) into a 1-based position with a
    /// character column.
    pub fn position(&self, point: Point) -> Position {
        let column = self
            .line_index
            .byte_column_to_char_column(point.row, point.column);
        Position::new(point.row as u32 + 1, column as u32 + 1)
    }
}

/// A node handle into a [`TreeSitterUnit`]'s tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterNode<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a SourceText,
    named_only: bool,
}

impl<'a> TreeSitterNode<'a> {
    /// The underlying Tree-sitter node.
    pub fn raw(&self) -> tree_sitter::Node<'a> {
        self.node
    }

    /// The node's grammar kind (e.g. `"call_expression"`).
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    fn wrap(&self, node: tree_sitter::Node<'a>) -> Self {
        Self {
            node,
            source: self.source,
            named_only: self.named_only,
        }
    }
}

impl<'a> SyntaxNode for TreeSitterNode<'a> {
    type Children = std::vec::IntoIter<TreeSitterNode<'a>>;

    fn extent(&self) -> Extent {
        let start = self.source.position(self.node.start_position());
        let end = self.source.position(self.node.end_position());
        // Nodes the parser invented during error recovery have no place in the file.
        if self.node.is_missing() {
            Extent::without_file(start, end)
        } else {
            Extent::in_file(Arc::clone(&self.source.file), start, end)
        }
    }

    fn children(&self) -> Self::Children {
        let mut cursor = self.node.walk();
        let children = if self.named_only {
            self.node
                .named_children(&mut cursor)
                .map(|child| self.wrap(child))
                .collect::<Vec<_>>()
        } else {
            self.node
                .children(&mut cursor)
                .map(|child| self.wrap(child))
                .collect::<Vec<_>>()
        };
        children.into_iter()
    }
}

/// A parsed buffer: Tree-sitter tree, source snapshot and syntax-error diagnostics.
pub struct TreeSitterUnit {
    tree: Tree,
    source: SourceText,
    diagnostics: Vec<Diagnostic>,
    named_only: bool,
}

impl TreeSitterUnit {
    fn build(tree: Tree, source: SourceText, named_only: bool) -> Self {
        let mut diagnostics = Vec::new();
        collect_diagnostics(tree.root_node(), &source, &mut diagnostics);
        Self {
            tree,
            source,
            diagnostics,
            named_only,
        }
    }

    /// The underlying Tree-sitter tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The text snapshot the tree was built from.
    pub fn source(&self) -> &SourceText {
        &self.source
    }
}

impl CompiledUnit for TreeSitterUnit {
    type Node<'a> = TreeSitterNode<'a>;

    fn root(&self) -> Self::Node<'_> {
        TreeSitterNode {
            node: self.tree.root_node(),
            source: &self.source,
            named_only: self.named_only,
        }
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

fn collect_diagnostics(
    node: tree_sitter::Node<'_>,
    source: &SourceText,
    out: &mut Vec<Diagnostic>,
) {
    if node.is_missing() {
        out.push(diagnostic_at(node, source, format!("missing `{}`", node.kind())));
        return;
    }
    if node.is_error() {
        out.push(diagnostic_at(node, source, unexpected_message(node, source)));
        return;
    }
    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_diagnostics(child, source, out);
    }
}

fn diagnostic_at(node: tree_sitter::Node<'_>, source: &SourceText, message: String) -> Diagnostic {
    let position = source.position(node.start_position());
    Diagnostic::new(
        SourceLocation {
            file: Some(Arc::clone(&source.file)),
            position,
        },
        DiagnosticSeverity::Error,
        message,
    )
}

fn unexpected_message(node: tree_sitter::Node<'_>, source: &SourceText) -> String {
    let snippet = source
        .text
        .get(node.start_byte()..node.end_byte())
        .and_then(|text| text.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or_default();

    if snippet.is_empty() {
        return "syntax error".to_string();
    }
    if snippet.chars().count() > MAX_SNIPPET_CHARS {
        let truncated = snippet.chars().take(MAX_SNIPPET_CHARS).collect::<String>();
        return format!("syntax error near `{truncated}...`");
    }
    format!("syntax error near `{snippet}`")
}

/// A compiler front-end backed by a Tree-sitter grammar.
///
/// Every parse and reparse builds a fresh tree from the full text; no incremental edit
/// information is available at this layer.
pub struct TreeSitterFrontEnd {
    config: TreeSitterFrontEndConfig,
    parser: Parser,
}

impl TreeSitterFrontEnd {
    /// Create a new front-end from the given config.
    pub fn new(config: TreeSitterFrontEndConfig) -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        parser
            .set_language(&config.language)
            .map_err(|e| TreeSitterError::Language(e.to_string()))?;
        Ok(Self { config, parser })
    }

    /// The active configuration.
    pub fn config(&self) -> &TreeSitterFrontEndConfig {
        &self.config
    }

    fn parse_tree(&mut self, text: &str) -> Result<Tree, TreeSitterError> {
        self.parser
            .parse(text, None)
            .ok_or(TreeSitterError::ParseCancelled)
    }
}

impl CompilerFrontEnd for TreeSitterFrontEnd {
    type Unit = TreeSitterUnit;
    type Error = TreeSitterError;

    fn parse(&mut self, path: &str, text: &str) -> Result<TreeSitterUnit, TreeSitterError> {
        let tree = self.parse_tree(text)?;
        let unit = TreeSitterUnit::build(
            tree,
            SourceText::new(path, text),
            self.config.named_nodes_only,
        );
        log::debug!("parsed {path}: {} syntax error(s)", unit.diagnostics.len());
        Ok(unit)
    }

    fn reparse(&mut self, unit: &mut TreeSitterUnit, text: &str) -> Result<(), TreeSitterError> {
        let tree = self.parse_tree(text)?;
        let source = SourceText::new(&unit.source.file, text);
        *unit = TreeSitterUnit::build(tree, source, self.config.named_nodes_only);
        log::debug!(
            "reparsed {}: {} syntax error(s)",
            unit.source.file,
            unit.diagnostics.len()
        );
        Ok(())
    }
}
