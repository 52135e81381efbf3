//! Path segmentation for the Alanui Path Trie.
//!
//! Insert, search, and remove all split paths through the same contract, so
//! `/test`, `test/`, `/test/`, and `test` address the same route.

/// Splits a path into its ordered segment tokens.
///
/// The contract, total over every string input:
///
/// 1. Strip exactly one leading `/` and exactly one trailing `/`.
/// 2. Split the remainder on `/` and drop empty tokens.
/// 3. If nothing remains (the path was `""`, `"/"`, or equivalent), yield a
///    single empty-string token addressing the root itself.
///
/// The returned vector is therefore never empty.
pub fn parse_segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        segments.push("");
    }
    segments
}
