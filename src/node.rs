//! Node storage for the Alanui Path Trie.
//!
//! Nodes live in an arena owned by the trie; relations between nodes are
//! expressed as arena indices rather than owning pointers. This gives every
//! node an O(1) parent back-reference (needed for removal and ancestry
//! inspection) while ownership still flows strictly root -> children.

use std::collections::HashMap;

/// Opaque identity of a node within one trie's arena.
///
/// A `NodeId` is only meaningful for the trie that produced it. The root of
/// every trie is [`NodeId::ROOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of any trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the Alanui Path Trie.
///
/// Each node represents one `/`-delimited segment of a registered path.
/// Wildcard nodes (from `*` or `:name` segments) always store `"*"` as their
/// segment and hang off `wildcard`, never off `children`.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<V> {
    /// The literal path token this node matched; `"*"` for wildcard nodes,
    /// empty for the root.
    pub segment: String,

    /// Payload attached at this node, if an insertion terminated here.
    pub value: Option<V>,

    /// Capture name for `:name` wildcards; `None` for bare `*` wildcards
    /// and literal nodes.
    pub param: Option<String>,

    /// Back-reference to the owning node; `None` only for the root.
    pub parent: Option<NodeId>,

    /// Literal children keyed by segment text. Never contains `"*"` or a
    /// key starting with `:`.
    pub children: HashMap<String, NodeId>,

    /// The single wildcard branch, if any.
    pub wildcard: Option<NodeId>,
}

impl<V> TrieNode<V> {
    /// Creates a literal node for `segment`.
    pub fn literal(segment: String, parent: NodeId) -> Self {
        Self {
            segment,
            value: None,
            param: None,
            parent: Some(parent),
            children: HashMap::new(),
            wildcard: None,
        }
    }

    /// Creates a wildcard node; `param` is the capture name for `:name`
    /// segments.
    pub fn wildcard(param: Option<String>, parent: NodeId) -> Self {
        Self {
            segment: "*".to_string(),
            value: None,
            param,
            parent: Some(parent),
            children: HashMap::new(),
            wildcard: None,
        }
    }

    /// Creates the root node of a trie.
    pub fn root() -> Self {
        Self {
            segment: String::new(),
            value: None,
            param: None,
            parent: None,
            children: HashMap::new(),
            wildcard: None,
        }
    }
}
