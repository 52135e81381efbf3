//! Configuration for the Alanui Path Trie.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the Alanui Path Trie.
///
/// The configuration is an open bag of named options so that hosts can pass
/// settings through their own config files without the trie having to know
/// about them up front. The current implementation recognizes no options:
/// anything supplied here is accepted, retained, and ignored. The type
/// exists so that future knobs (for example, a case-folding mode) can be
/// added without breaking the constructor signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlanuiTrieConfig {
    /// Free-form options, keyed by name.
    options: HashMap<String, serde_json::Value>,
}

impl AlanuiTrieConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a named option, replacing any previous value under the same key.
    ///
    /// # Arguments
    ///
    /// * `key` - The option name.
    /// * `value` - The option value; any JSON-representable value works.
    #[must_use]
    pub fn with_option<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }

    /// Returns the number of options that were supplied.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
