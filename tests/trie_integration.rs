// Copyright (c) 2026 Alanui Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for the Alanui Path Trie.
//! Exercises the public surface end to end: registration, lookup with
//! parameter capture, removal (including the wildcard-terminal quirk), and
//! composition of tries through `merge`.

use alanui_trie::{merge, AlanuiTrie, AlanuiTrieConfig};

#[test]
fn test_basic_routing() {
    let mut trie = AlanuiTrie::new();

    // empty path is allowed and addresses the root
    trie.insert("", Some("testEmpty"));
    assert_eq!(trie.search("").unwrap().value, Some(&"testEmpty"));
    assert_eq!(trie.search("/").unwrap().value, Some(&"testEmpty"));

    trie.insert("/test", Some("test"));
    assert_eq!(trie.search("/test").unwrap().value, Some(&"test"));
    // trailing slash is ignored
    assert_eq!(trie.search("/test/").unwrap().value, Some(&"test"));
    // leading slash is also ignored
    assert_eq!(trie.search("test/").unwrap().value, Some(&"test"));

    trie.insert("/test/1", Some("test1"));
    assert_eq!(trie.search("/test/1").unwrap().value, Some(&"test1"));

    // no result
    assert!(trie.search("/test/2").is_none());

    // test remove
    assert!(trie.remove("/test/1"));
    assert!(trie.search("/test/1").is_none());
    // remove non-existing path
    assert!(!trie.remove("/unknown"));
}

#[test]
fn test_degenerate_paths_never_fail() {
    let mut trie: AlanuiTrie<&str> = AlanuiTrie::new();

    // Total over all inputs: none of these may panic
    for path in ["", "/", "//", "///", "a//b", ":", "*", "/:/"] {
        trie.insert(path, None);
        let _ = trie.search(path);
        let _ = trie.remove(path);
    }
}

#[test]
fn test_match_metadata() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/shop/items", Some(7_u32));

    let hit = trie.search("shop/items/").unwrap();
    // The result carries the path as searched, not as registered
    assert_eq!(hit.path, "shop/items/");
    assert_eq!(hit.segment, "items");
    assert_eq!(hit.param, None);

    // Ancestry is inspectable through node ids
    let parent = hit.parent.expect("items has a parent");
    assert_eq!(trie.segment(parent), Some("shop"));
    let grandparent = trie.parent(parent).expect("shop hangs off the root");
    assert_eq!(trie.segment(grandparent), Some(""));
    assert_eq!(trie.parent(grandparent), None);
}

#[test]
fn test_wildcard_routes() {
    let mut trie = AlanuiTrie::new();

    trie.insert("/test/*/1", Some("test*1"));
    let hit = trie.search("/test/wild/1").unwrap();
    assert_eq!(hit.value, Some(&"test*1"));
    // bare wildcards capture nothing
    assert!(hit.params.is_empty());

    trie.insert("/some/:param/1", Some("some:param1"));
    let hit = trie.search("/some/testParam/1").unwrap();
    assert_eq!(hit.value, Some(&"some:param1"));
    assert_eq!(
        hit.params.get("param").map(String::as_str),
        Some("testParam")
    );

    // removing below a wildcard works with any segment spelling
    assert!(trie.remove("/test/:unInsertedName/1"));
    assert!(trie.search("/test/wild/1").is_none());
}

#[test]
fn test_wildcard_override() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/test/*/1", Some("test*1"));
    assert_eq!(trie.search("/test/wild/1").unwrap().value, Some(&"test*1"));

    trie.insert("/test/:param/2", Some("testParam2"));
    let hit = trie.search("/test/wild1/2").unwrap();
    assert_eq!(hit.value, Some(&"testParam2"));
    assert_eq!(hit.params.get("param").map(String::as_str), Some("wild1"));

    trie.insert("/test/:newparam/3", Some("testParam3"));
    let hit = trie.search("/test/wild2/3").unwrap();
    assert_eq!(hit.value, Some(&"testParam3"));
    assert_eq!(hit.params.get("param"), None);
    assert_eq!(
        hit.params.get("newparam").map(String::as_str),
        Some("wild2")
    );
}

/// The documented removal quirk: when the final segment itself resolves
/// through the wildcard branch, `remove` reports success without detaching
/// the branch.
#[test]
fn test_remove_wildcard_terminal_reports_success_without_detaching() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/files/:name", Some("file"));

    assert!(trie.remove("/files/readme"));
    // still reachable: the deletion targeted the parent's literal children,
    // which never contained the wildcard
    let hit = trie.search("/files/readme").unwrap();
    assert_eq!(hit.value, Some(&"file"));
    assert_eq!(hit.params.get("name").map(String::as_str), Some("readme"));

    // same outcome when the query spells the wildcard pattern itself
    assert!(trie.remove("/files/:name"));
    assert!(trie.search("/files/other").is_some());
}

#[test]
fn test_merge_at_root() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/*/1", Some("test*1"));

    let mut other = AlanuiTrie::new();
    other.insert("/:param/2", Some("testParam2"));

    merge(&mut trie, other, "");
    // the source's wildcard branch replaced the destination's
    assert!(trie.search("/wild/1").is_none());
    assert_eq!(trie.search("/wild/2").unwrap().value, Some(&"testParam2"));

    // capture names survive the graft
    let hit = trie.search("/wild/2").unwrap();
    assert_eq!(hit.params.get("param").map(String::as_str), Some("wild"));
}

#[test]
fn test_merge_into_mount_point() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/test/tt/1", Some("test*1"));

    let mut other = AlanuiTrie::new();
    other.insert("/param/2", Some("testParam2"));

    merge(&mut trie, other, "test/asdf");
    assert_eq!(trie.search("/test/tt/1").unwrap().value, Some(&"test*1"));
    assert_eq!(
        trie.search("/test/asdf/param/2").unwrap().value,
        Some(&"testParam2")
    );
    // parent node is set correctly on grafted children
    let hit = trie.search("/test/asdf/param").unwrap();
    assert_eq!(trie.segment(hit.parent.unwrap()), Some("asdf"));
}

#[test]
fn test_merge_creates_mount_point() {
    let mut trie = AlanuiTrie::new();
    trie.insert("/test/1", Some("test*1"));

    let mut other = AlanuiTrie::new();
    other.insert("/:param/2", Some("testParam2"));

    merge(&mut trie, other, "notExist");
    assert_eq!(trie.search("/test/1").unwrap().value, Some(&"test*1"));
    assert_eq!(
        trie.search("/notExist/wild/2").unwrap().value,
        Some(&"testParam2")
    );
    // the created mount point itself resolves
    assert!(trie.search("/notExist").is_some());
}

#[test]
fn test_merge_deep_source_routes_come_along() {
    let mut api = AlanuiTrie::new();
    api.insert("/users/:id", Some("user"));
    api.insert("/users/:id/posts/:post", Some("post"));
    api.insert("/health", Some("health"));

    let mut app = AlanuiTrie::new();
    app.insert("/", Some("index"));
    merge(&mut app, api, "/api/v1");

    assert_eq!(app.search("/").unwrap().value, Some(&"index"));
    assert_eq!(app.search("/api/v1/health").unwrap().value, Some(&"health"));

    let hit = app.search("/api/v1/users/9/posts/3").unwrap();
    assert_eq!(hit.value, Some(&"post"));
    assert_eq!(hit.params.get("id").map(String::as_str), Some("9"));
    assert_eq!(hit.params.get("post").map(String::as_str), Some("3"));
}

#[test]
fn test_unknown_options_are_accepted_and_ignored() {
    let config = AlanuiTrieConfig::new()
        .with_option("case_sensitive", false)
        .with_option("anything", serde_json::json!({ "nested": [1, 2, 3] }));

    let mut trie = AlanuiTrie::with_config(config);
    trie.insert("/Test", Some(1_u8));

    // options have no effect on behavior
    assert_eq!(trie.search("/Test").unwrap().value, Some(&1));
    assert!(trie.search("/test").is_none());
    assert_eq!(trie.config().len(), 2);
}
