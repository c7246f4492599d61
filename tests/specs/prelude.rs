//! Shared fixtures for CLI specs

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Store fixture: root node 1 with five articles, three in section 1 and
/// two in section 3.
pub const STORE: &str = r#"{
  "sections": [1, 2, 3],
  "classes": [
    { "id": 1, "identifier": "folder" },
    { "id": 2, "identifier": "article" }
  ],
  "archive_node": null,
  "nodes": [
    { "id": 1, "parent": null, "name": "news", "class": 1, "section": 1,
      "published": "2024-01-01T00:00:00Z" },
    { "id": 2, "parent": 1, "name": "a", "class": 2, "section": 1,
      "published": "2024-01-02T00:00:00Z" },
    { "id": 3, "parent": 1, "name": "b", "class": 2, "section": 1,
      "published": "2024-01-03T00:00:00Z" },
    { "id": 4, "parent": 1, "name": "c", "class": 2, "section": 3,
      "published": "2024-01-04T00:00:00Z" },
    { "id": 5, "parent": 1, "name": "d", "class": 2, "section": 1,
      "published": "2024-01-05T00:00:00Z" },
    { "id": 6, "parent": 1, "name": "e", "class": 2, "section": 3,
      "published": "2024-01-06T00:00:00Z" }
  ],
  "trash": []
}"#;

/// Config fixture matching [`STORE`]: one tree job re-sectioning 1 -> 2.
pub const CONFIG: &str = r#"
[archive]
available_jobs = ["old_news"]
delete_action = "move_to_trash"
container_classes = ["folder"]
allow_delete = "no"

[job.old_news]
parent_nodes = { "1" = "tree" }
node_filters = { "1" = "more_than:0" }
actions = ["change_section"]
section_mappings = { "1" = 2 }
"#;

/// A project directory holding a config and a store file
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(config: &str, store: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("arkiv.toml"), config).unwrap();
        std::fs::write(dir.path().join("store.json"), store).unwrap();
        Self { dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("arkiv.toml")
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    /// The binary, pointed at this project's config and store
    pub fn arkiv(&self) -> Command {
        let mut cmd = Command::cargo_bin("arkiv").unwrap();
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--store")
            .arg(self.store_path());
        cmd
    }

    /// Parse the store file back as JSON for state assertions
    pub fn store_json(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.store_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
