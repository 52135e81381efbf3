//! Alanui Path Trie
//!
//! This library provides a path-matching trie keyed on `/`-delimited
//! segments. A route string is resolved to a previously registered value,
//! with support for static segments, non-capturing wildcard segments (`*`),
//! and named capturing segments (`:name`). Independently built tries can be
//! composed by grafting one onto another at an arbitrary mount point.
//!
//! # Features
//!
//! - Arena-backed node storage: parent and child links are indices, so the
//!   child -> parent back-reference needed for removal never creates a
//!   reference cycle
//! - Path parameter extraction (`/user/:id`)
//! - Tolerant path normalization: `/test`, `test/`, `/test/` and `test` are
//!   all the same route
//! - Structural merge of a whole trie under a mount point by ownership
//!   transfer, without copying subtrees
//!
//! The structure is single-threaded by design: mutating operations rewire
//! links in place, so a shared instance needs external synchronization.
//!
//! # Example
//!
//! ```
//! use alanui_trie::AlanuiTrie;
//!
//! let mut trie = AlanuiTrie::new();
//! trie.insert("/user/:id/posts", Some("posts-handler"));
//!
//! let hit = trie.search("/user/42/posts").unwrap();
//! assert_eq!(hit.value, Some(&"posts-handler"));
//! assert_eq!(hit.params.get("id").map(String::as_str), Some("42"));
//! ```

// Re-export public modules
pub mod config;
pub mod node;
pub mod path;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use config::AlanuiTrieConfig;
pub use node::NodeId;
pub use trie::{merge, AlanuiTrie, PathMatch};

/// Version information for the Alanui Path Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
