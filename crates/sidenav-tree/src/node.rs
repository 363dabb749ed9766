//! Tree node types.
//!
//! A [`Node`] is either a category (owns an ordered list of children) or a
//! document (leaf). The node's path is fixed at construction; reordering a
//! tree means rebuilding nodes with the same paths and a new child order.

use serde::Serialize;

/// Separator used when joining path segments for lookups and display.
pub const PATH_SEPARATOR: char = '/';

/// Kind of tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Maps to a directory; owns ordered children.
    Category,
    /// Maps to a single content file; always a leaf.
    Document,
}

/// One category or document in the documentation tree.
///
/// Within one parent all child keys are unique; the loader enforces this
/// when scanning and consumers may rely on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Last path segment; empty only for the root.
    key: String,
    /// Joined logical path (e.g. `"javascript/beginners-guide"`, `""` for root).
    path: String,
    kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Create a category node from its path segments and children.
    #[must_use]
    pub fn category(segments: Vec<String>, children: Vec<Node>) -> Self {
        let (key, path) = join_segments(segments);
        Self {
            key,
            path,
            kind: NodeKind::Category,
            children,
        }
    }

    /// Create a document (leaf) node from its path segments.
    #[must_use]
    pub fn document(segments: Vec<String>) -> Self {
        let (key, path) = join_segments(segments);
        Self {
            key,
            path,
            kind: NodeKind::Document,
            children: Vec::new(),
        }
    }

    /// The identifier used for ordering lookups at the parent level.
    ///
    /// Empty only for the root node.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Joined logical path (`""` for the root).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Node kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// True for category nodes.
    #[must_use]
    pub fn is_category(&self) -> bool {
        self.kind == NodeKind::Category
    }

    /// Ordered children (empty for documents).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Total number of nodes in this subtree, including self.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Decompose into `(key, path, kind, children)` for rebuilding.
    ///
    /// Used by tree transformations that keep identity but change child
    /// order; pair with [`Node::from_parts`].
    #[must_use]
    pub fn into_parts(self) -> (String, String, NodeKind, Vec<Node>) {
        (self.key, self.path, self.kind, self.children)
    }

    /// Rebuild a node from parts produced by [`Node::into_parts`].
    ///
    /// Children passed for a document node are discarded; documents are
    /// leaves by definition.
    #[must_use]
    pub fn from_parts(key: String, path: String, kind: NodeKind, children: Vec<Node>) -> Self {
        let children = match kind {
            NodeKind::Category => children,
            NodeKind::Document => Vec::new(),
        };
        Self {
            key,
            path,
            kind,
            children,
        }
    }
}

/// Derive `(key, joined_path)` from path segments.
fn join_segments(segments: Vec<String>) -> (String, String) {
    let key = segments.last().cloned().unwrap_or_default();
    let mut path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            path.push(PATH_SEPARATOR);
        }
        path.push_str(segment);
    }
    (key, path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // Trees are handed across threads during parallel per-locale builds
    static_assertions::assert_impl_all!(Node: Send, Sync);

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_document_key_is_last_segment() {
        let node = Node::document(segs(&["javascript", "beginners-guide", "02-variables"]));

        assert_eq!(node.key(), "02-variables");
        assert_eq!(node.path(), "javascript/beginners-guide/02-variables");
        assert_eq!(node.kind(), NodeKind::Document);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_root_category_has_empty_key_and_path() {
        let root = Node::category(Vec::new(), Vec::new());

        assert_eq!(root.key(), "");
        assert_eq!(root.path(), "");
        assert!(root.is_category());
    }

    #[test]
    fn test_category_owns_children_in_given_order() {
        let children = vec![
            Node::document(segs(&["guide", "b"])),
            Node::document(segs(&["guide", "a"])),
        ];
        let node = Node::category(segs(&["guide"]), children);

        let keys: Vec<_> = node.children().iter().map(Node::key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_node_count_includes_all_descendants() {
        let tree = Node::category(
            Vec::new(),
            vec![
                Node::category(segs(&["a"]), vec![Node::document(segs(&["a", "x"]))]),
                Node::document(segs(&["b"])),
            ],
        );

        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_from_parts_round_trips_category() {
        let node = Node::category(segs(&["guide"]), vec![Node::document(segs(&["guide", "a"]))]);
        let expected = node.clone();

        let (key, path, kind, children) = node.into_parts();
        let rebuilt = Node::from_parts(key, path, kind, children);

        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_from_parts_discards_children_on_document() {
        let node = Node::from_parts(
            "page".to_owned(),
            "guide/page".to_owned(),
            NodeKind::Document,
            vec![Node::document(segs(&["guide", "stray"]))],
        );

        assert!(node.children().is_empty());
    }

    #[test]
    fn test_serialization_skips_empty_children() {
        let node = Node::document(segs(&["guide"]));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["key"], "guide");
        assert_eq!(json["path"], "guide");
        assert_eq!(json["kind"], "document");
        assert!(json.get("children").is_none()); // Skipped when empty
    }

    #[test]
    fn test_serialization_nests_children() {
        let node = Node::category(segs(&["guide"]), vec![Node::document(segs(&["guide", "a"]))]);

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "category");
        assert_eq!(json["children"][0]["key"], "a");
        assert_eq!(json["children"][0]["path"], "guide/a");
    }
}
