//! The Alanui Path Trie engine.
//!
//! This module contains the trie itself: insertion, lookup with parameter
//! capture, removal, and the free-standing [`merge`] operation that grafts
//! one trie onto another at a mount point.

use std::collections::HashMap;

use crate::config::AlanuiTrieConfig;
use crate::node::{NodeId, TrieNode};
use crate::path::parse_segments;

/// A successful lookup.
///
/// The wrapper is a copy-out view: the parameter map and searched path are
/// owned by the result, and everything else is borrowed immutably, so a
/// caller can never mutate the trie through it.
#[derive(Debug, Clone)]
pub struct PathMatch<'a, V> {
    /// The path string that was searched for.
    pub path: String,

    /// Identity of the terminal node within the trie.
    pub node: NodeId,

    /// Identity of the terminal node's parent; `None` only when the root
    /// itself terminated the walk.
    pub parent: Option<NodeId>,

    /// The literal token stored on the terminal node (`"*"` if the walk
    /// ended on a wildcard node).
    pub segment: &'a str,

    /// The terminal node's capture name, if it is a `:name` wildcard.
    pub param: Option<&'a str>,

    /// The value registered at the terminal node. `None` when the path
    /// resolves to a node that only exists as a prefix of deeper routes.
    pub value: Option<&'a V>,

    /// Captured `name -> matched segment text` pairs accumulated along the
    /// walk.
    pub params: HashMap<String, String>,
}

/// A path-matching trie keyed on `/`-delimited segments.
///
/// Routes are registered with [`insert`](Self::insert) and resolved with
/// [`search`](Self::search). A segment spelled `*` matches any single
/// segment without capturing; a segment spelled `:name` matches any single
/// segment and records the matched text under `name`.
///
/// Nodes live in an arena owned by the trie and refer to each other by
/// [`NodeId`] index, so the child -> parent back-reference needed by
/// [`remove`](Self::remove) never forms an ownership cycle. Detached nodes
/// stay in the arena as unreachable records until the trie is dropped.
///
/// The structure is not thread-safe: mutating operations rewire links in
/// place, so sharing an instance across threads requires an external lock.
#[derive(Debug)]
pub struct AlanuiTrie<V> {
    /// Arena storage; index 0 is always the root.
    nodes: Vec<TrieNode<V>>,

    /// Configuration options (currently accepted and ignored).
    config: AlanuiTrieConfig,
}

impl<V> Default for AlanuiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AlanuiTrie<V> {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlanuiTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie. No options are currently
    ///   recognized; arbitrary options are accepted and ignored.
    pub fn with_config(config: AlanuiTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            config,
        }
    }

    /// Returns the configuration the trie was created with.
    pub fn config(&self) -> &AlanuiTrieConfig {
        &self.config
    }

    /// Registers `value` at `path`, overwriting any previous value there.
    ///
    /// Any string is accepted; there is no failure mode. `""` and `"/"`
    /// address the root path. A `value` of `None` marks the path as existing
    /// without a payload.
    ///
    /// Walking an existing literal prefix reuses its nodes, but a `*` or
    /// `:name` segment always creates a fresh wildcard node and replaces the
    /// current wildcard branch at that position, even if one with the same
    /// capture name is already attached. Only one wildcard lineage per
    /// position is retained; the most recent insertion wins.
    pub fn insert<P: AsRef<str>>(&mut self, path: P, value: Option<V>) {
        let path = path.as_ref();
        let mut current = NodeId::ROOT;

        for segment in parse_segments(path) {
            let existing = self.nodes[current.0].children.get(segment).copied();
            if let Some(child) = existing {
                current = child;
            } else if segment == "*" || segment.starts_with(':') {
                let param = segment.strip_prefix(':').map(str::to_string);
                let id = self.alloc(TrieNode::wildcard(param, current));
                self.nodes[current.0].wildcard = Some(id);
                current = id;
            } else {
                let id = self.alloc(TrieNode::literal(segment.to_string(), current));
                self.nodes[current.0].children.insert(segment.to_string(), id);
                current = id;
            }
        }

        self.nodes[current.0].value = value;
        tracing::trace!(path, "path inserted");
    }

    /// Resolves `path` to a registered node.
    ///
    /// The walk prefers an exact literal child for each segment and falls
    /// back to the wildcard branch if one exists; there is no backtracking.
    /// `:name` captures are collected into [`PathMatch::params`].
    ///
    /// # Returns
    ///
    /// * `Some(PathMatch)` - if every segment was consumed. The match's
    ///   `value` may still be `None` when the node only exists as a prefix
    ///   of deeper routes.
    /// * `None` - if a segment matched neither a literal child nor a
    ///   wildcard branch.
    pub fn search<P: AsRef<str>>(&self, path: P) -> Option<PathMatch<'_, V>> {
        let path = path.as_ref();
        let (id, params) = self.walk(path)?;
        let node = &self.nodes[id.0];

        Some(PathMatch {
            path: path.to_string(),
            node: id,
            parent: node.parent,
            segment: node.segment.as_str(),
            param: node.param.as_deref(),
            value: node.value.as_ref(),
            params,
        })
    }

    /// Removes the route at `path`.
    ///
    /// The walk is the same as [`search`](Self::search): literal child
    /// first, wildcard branch as fallback. If the walk completes, the last
    /// segment's literal text is deleted from the terminal node's parent's
    /// literal children and `true` is returned; otherwise `false`.
    ///
    /// Known quirk, kept deliberately for compatibility: when the *final*
    /// segment resolves through the wildcard branch, the
    /// parent's literal children never contained that segment text, so the
    /// deletion is a no-op: the wildcard branch stays attached and
    /// reachable even though the call still returns `true`. Removal of a
    /// literal node *below* a wildcard works normally.
    pub fn remove<P: AsRef<str>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let Some((id, _)) = self.walk(path) else {
            return false;
        };

        let segments = parse_segments(path);
        let last = segments.last().copied().unwrap_or_default();
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.remove(last);
        }
        tracing::trace!(path, "path removed");
        true
    }

    /// Returns the number of values currently reachable from the root.
    ///
    /// This traverses the reachable part of the trie, so it is O(n) in the
    /// number of live nodes.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values().copied());
            if let Some(wild) = node.wildcard {
                stack.push(wild);
            }
        }
        count
    }

    /// Returns `true` if no values are reachable from the root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every registered route, keeping the configuration.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::root());
    }

    /// Returns the literal token stored on `id`, if the id belongs to this
    /// trie (`"*"` for wildcard nodes, empty for the root).
    pub fn segment(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|node| node.segment.as_str())
    }

    /// Returns the parent of `id`, if the id belongs to this trie and is
    /// not the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Walks `path` without creating nodes, collecting `:name` captures.
    fn walk(&self, path: &str) -> Option<(NodeId, HashMap<String, String>)> {
        let mut current = NodeId::ROOT;
        let mut params = HashMap::new();

        for segment in parse_segments(path) {
            if let Some(child) = self.nodes[current.0].children.get(segment).copied() {
                current = child;
            } else if let Some(wild) = self.nodes[current.0].wildcard {
                current = wild;
                if let Some(name) = self.nodes[wild.0].param.as_ref() {
                    params.insert(name.clone(), segment.to_string());
                }
            } else {
                return None;
            }
        }

        Some((current, params))
    }

    fn alloc(&mut self, node: TrieNode<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

/// Grafts `from` onto `to` at `mount_path` (`""` or `"/"` mounts at the
/// root).
///
/// The source trie is consumed: its subtrees are moved into the destination
/// arena, not deep-copied, so a merge is an ownership transfer rather than a
/// traversal-and-copy.
///
/// Resolution of the mount point uses the same walk as
/// [`AlanuiTrie::search`]. If a non-root mount path does not resolve, it is
/// first inserted with the source root's value as payload, so searching the
/// mount point afterwards yields a meaningful result.
///
/// Only the source root's immediate children are spliced onto the endpoint:
/// literal children overwrite same-keyed destination children, and the
/// source root's wildcard branch, if any, overwrites the endpoint's. Deeper
/// descendants come along because they already hang off the grafted nodes.
/// Grafted top-level nodes are re-parented onto the endpoint so ancestry
/// queries keep working in the destination.
pub fn merge<V>(to: &mut AlanuiTrie<V>, from: AlanuiTrie<V>, mount_path: &str) {
    let AlanuiTrie {
        nodes: mut from_nodes,
        config: _,
    } = from;

    let endpoint = if mount_path.is_empty() || mount_path == "/" {
        NodeId::ROOT
    } else if let Some((node, _)) = to.walk(mount_path) {
        node
    } else {
        let fallback = from_nodes[NodeId::ROOT.0].value.take();
        to.insert(mount_path, fallback);
        match to.walk(mount_path) {
            Some((node, _)) => node,
            // insert always makes the mount path resolvable
            None => return,
        }
    };

    // The source root is not carried over, so source indices shift down by
    // one on top of the destination arena offset.
    let offset = to.nodes.len();
    let remap = move |id: NodeId| NodeId(offset + id.0 - 1);

    let mut source = from_nodes.into_iter();
    let Some(source_root) = source.next() else {
        return;
    };

    for mut node in source {
        node.parent = node.parent.map(|parent| {
            if parent == NodeId::ROOT {
                endpoint
            } else {
                remap(parent)
            }
        });
        for child in node.children.values_mut() {
            *child = remap(*child);
        }
        node.wildcard = node.wildcard.map(remap);
        to.nodes.push(node);
    }

    for (segment, child) in source_root.children {
        to.nodes[endpoint.0].children.insert(segment, remap(child));
    }
    if let Some(wild) = source_root.wildcard {
        to.nodes[endpoint.0].wildcard = Some(remap(wild));
    }
    tracing::trace!(mount_path, "trie merged");
}
