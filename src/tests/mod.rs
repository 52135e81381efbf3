//! Internal test suites for the Alanui Path Trie.
//!
//! Unit tests live next to the code they exercise; this module holds the
//! cross-cutting property-based suites.
