//! Parse-tree locator.
//!
//! Finds the deepest node whose extent contains a source location by descending from the
//! root and pruning every subtree that does not contain it.

use crate::syntax::{SourceLocation, SyntaxNode};

/// Returns `true` if `location` lies within `node`'s extent.
///
/// File identity is taken from the extent's *start* location and compared with plain string
/// equality (no path normalization, so `./a.c` and `a.c` are different files). If either side
/// has no file, the node never contains the location, even when the line/column range would.
pub fn contains<N: SyntaxNode>(node: &N, location: &SourceLocation) -> bool {
    let extent = node.extent();
    let (Some(node_file), Some(location_file)) = (extent.file_name(), location.file_name()) else {
        return false;
    };
    if node_file != location_file {
        return false;
    }

    extent.start.position <= location.position && location.position <= extent.end.position
}

/// Find the tightest node enclosing `location`, starting at `root`.
///
/// Children are visited in order and the first one that yields a match wins, even if a later
/// sibling has a smaller extent. Returns `None` if `root` itself does not contain the
/// location.
pub fn find_enclosing_node<N: SyntaxNode>(root: N, location: &SourceLocation) -> Option<N> {
    if !contains(&root, location) {
        return None;
    }

    for child in root.children() {
        if let Some(found) = find_enclosing_node(child, location) {
            return Some(found);
        }
    }

    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Extent, Node, Position};

    fn node(file: &str, start: (u32, u32), end: (u32, u32)) -> Node {
        Node::new(Extent::in_file(
            file,
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        ))
    }

    #[test]
    fn test_contains_bounds_are_inclusive() {
        let n = node("a.c", (2, 3), (4, 5));
        assert!(contains(&&n, &SourceLocation::new("a.c", 2, 3)));
        assert!(contains(&&n, &SourceLocation::new("a.c", 4, 5)));
        assert!(contains(&&n, &SourceLocation::new("a.c", 3, 100)));
        assert!(!contains(&&n, &SourceLocation::new("a.c", 2, 2)));
        assert!(!contains(&&n, &SourceLocation::new("a.c", 4, 6)));
        assert!(!contains(&&n, &SourceLocation::new("a.c", 1, 9)));
    }

    #[test]
    fn test_contains_requires_files_on_both_sides() {
        let n = node("a.c", (1, 1), (9, 1));
        assert!(!contains(&&n, &SourceLocation::without_file(2, 1)));

        let synthetic = Node::new(Extent::without_file(Position::new(1, 1), Position::new(9, 1)));
        assert!(!contains(&&synthetic, &SourceLocation::new("a.c", 2, 1)));
    }

    #[test]
    fn test_contains_ignores_end_file() {
        let n = Node::new(Extent::new(
            SourceLocation::new("a.c", 1, 1),
            SourceLocation::without_file(5, 1),
        ));
        assert!(contains(&&n, &SourceLocation::new("a.c", 3, 1)));
    }

    #[test]
    fn test_leaf_root_is_returned() {
        let root = node("a.c", (1, 1), (1, 10));
        let found = find_enclosing_node(&root, &SourceLocation::new("a.c", 1, 5));
        assert!(std::ptr::eq(found.unwrap(), &root));
    }
}
