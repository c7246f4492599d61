// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use arkiv_core::SortOrder;
use tempfile::TempDir;

const SAMPLE_STORE: &str = r#"{
  "sections": [1, 2],
  "classes": [
    { "id": 1, "identifier": "folder" },
    { "id": 2, "identifier": "article" }
  ],
  "archive_node": 9,
  "nodes": [
    { "id": 1, "parent": null, "name": "root", "class": 1, "section": 1,
      "published": "2024-01-01T00:00:00Z" },
    { "id": 2, "parent": 1, "name": "news", "class": 2, "section": 1,
      "published": "2024-01-02T00:00:00Z" },
    { "id": 3, "parent": 1, "name": "sports", "class": 2, "section": 2,
      "published": "2024-01-03T00:00:00Z" },
    { "id": 9, "parent": null, "name": "archive", "class": 1, "section": 1,
      "published": "2024-01-01T00:00:00Z" }
  ],
  "trash": []
}"#;

fn open_sample() -> (TempDir, JsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, SAMPLE_STORE).unwrap();
    (dir, JsonStore::open(&path).unwrap())
}

#[test]
fn open_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        JsonStore::open(&path).unwrap_err(),
        RepoError::Corrupt(_)
    ));
}

#[test]
fn existence_checks() {
    let (_dir, store) = open_sample();
    assert!(store.node_exists(NodeId(2)).unwrap());
    assert!(!store.node_exists(NodeId(42)).unwrap());
    assert!(store.section_exists(SectionId(2)).unwrap());
    assert!(!store.section_exists(SectionId(3)).unwrap());
    assert!(store.class_exists(&ClassRef::Id(2)).unwrap());
    assert!(store
        .class_exists(&ClassRef::Identifier("folder".to_string()))
        .unwrap());
    assert!(!store
        .class_exists(&ClassRef::Identifier("blog".to_string()))
        .unwrap());
}

#[test]
fn fetch_builds_items_with_class_identifiers() {
    let (_dir, store) = open_sample();
    let request = FetchRequest {
        depth: Some(1),
        sort: SortOrder::NodeAsc,
        ..FetchRequest::default()
    };
    let items = store.fetch_subtree(NodeId(1), &request).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].node, NodeId(2));
    assert_eq!(items[0].class_identifier, "article");
    assert_eq!(items[1].section, SectionId(2));
}

#[test]
fn mutations_persist_across_reopen() {
    let (dir, store) = open_sample();
    let path = dir.path().join("store.json");

    store.set_item_section(NodeId(2), SectionId(2)).unwrap();
    store.hide_item(NodeId(3)).unwrap();
    store.relocate_item(NodeId(3)).unwrap();
    drop(store);

    let reopened = JsonStore::open(&path).unwrap();
    let request = FetchRequest {
        sort: SortOrder::NodeAsc,
        ..FetchRequest::default()
    };
    let items = reopened.fetch_subtree(NodeId(9), &request).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].node, NodeId(3));
    assert!(items[0].hidden);

    let news = reopened.fetch_subtree(NodeId(1), &request).unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].section, SectionId(2));
}

#[test]
fn trash_delete_moves_subtree_to_trash() {
    let (dir, store) = open_sample();
    let path = dir.path().join("store.json");

    store.delete_item(NodeId(2), DeleteMode::Trash).unwrap();
    drop(store);

    let content = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    let trash = doc["trash"].as_array().unwrap();
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0]["id"], 2);

    let reopened = JsonStore::open(&path).unwrap();
    assert!(!reopened.node_exists(NodeId(2)).unwrap());
}

#[test]
fn hard_delete_discards_the_subtree() {
    let (dir, store) = open_sample();
    let path = dir.path().join("store.json");

    store.delete_item(NodeId(3), DeleteMode::Delete).unwrap();
    drop(store);

    let reopened = JsonStore::open(&path).unwrap();
    assert!(!reopened.node_exists(NodeId(3)).unwrap());
    let content = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(doc["trash"].as_array().unwrap().is_empty());
}

#[test]
fn relocate_without_archive_node_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let doc = SAMPLE_STORE.replace("\"archive_node\": 9,", "\"archive_node\": null,");
    std::fs::write(&path, doc).unwrap();

    let store = JsonStore::open(&path).unwrap();
    assert!(matches!(
        store.relocate_item(NodeId(2)).unwrap_err(),
        RepoError::NoArchiveNode
    ));
}
