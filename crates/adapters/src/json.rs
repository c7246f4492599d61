// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-file-backed content store.
//!
//! The whole store is one serde_json document: sections, classes, a node
//! tree with parent links, an optional archive node, and a trash list.
//! Mutations rewrite the file before returning, so a completed call is a
//! persisted call.

use arkiv_core::{
    ClassRef, ContentRepository, DeleteMode, FetchRequest, Item, NodeId, RepoError, SectionId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// On-disk document shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Document {
    sections: Vec<u64>,
    classes: Vec<DocClass>,
    archive_node: Option<u64>,
    nodes: Vec<DocNode>,
    trash: Vec<DocNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocClass {
    id: u64,
    identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocNode {
    id: u64,
    parent: Option<u64>,
    name: String,
    class: u64,
    section: u64,
    published: DateTime<Utc>,
    #[serde(default)]
    hidden: bool,
}

impl Document {
    fn node(&self, id: NodeId) -> Option<&DocNode> {
        self.nodes.iter().find(|n| n.id == id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut DocNode> {
        self.nodes.iter_mut().find(|n| n.id == id.0)
    }

    fn item(&self, node: &DocNode) -> Result<Item, RepoError> {
        let class = self
            .classes
            .iter()
            .find(|c| c.id == node.class)
            .ok_or_else(|| {
                RepoError::Corrupt(format!(
                    "node {} references unknown class {}",
                    node.id, node.class
                ))
            })?;
        Ok(Item {
            node: NodeId(node.id),
            name: node.name.clone(),
            class_id: class.id,
            class_identifier: class.identifier.clone(),
            section: SectionId(node.section),
            published: node.published,
            hidden: node.hidden,
        })
    }

    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.parent == Some(parent.0))
            .map(|n| NodeId(n.id))
            .collect();
        ids.sort();
        ids
    }

    fn collect_descendants(&self, root: NodeId, depth: Option<u32>, out: &mut Vec<NodeId>) {
        if depth == Some(0) {
            return;
        }
        let next = depth.map(|d| d - 1);
        for child in self.children(root) {
            out.push(child);
            self.collect_descendants(child, next, out);
        }
    }

    fn detach_subtree(&mut self, root: NodeId) -> Vec<DocNode> {
        let mut ids = vec![root];
        self.collect_descendants(root, None, &mut ids);
        let mut detached = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(pos) = self.nodes.iter().position(|n| n.id == id.0) {
                detached.push(self.nodes.remove(pos));
            }
        }
        detached
    }
}

/// File-backed content store
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: Mutex<Document>,
}

impl JsonStore {
    /// Open an existing store document
    pub fn open(path: &Path) -> Result<Self, RepoError> {
        let content = std::fs::read_to_string(path)?;
        let doc: Document =
            serde_json::from_str(&content).map_err(|e| RepoError::Corrupt(e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            doc: Mutex::new(doc),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Document> {
        self.doc.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn flush(&self, doc: &Document) -> Result<(), RepoError> {
        let json =
            serde_json::to_string_pretty(doc).map_err(|e| RepoError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "store flushed");
        Ok(())
    }
}

impl ContentRepository for JsonStore {
    fn node_exists(&self, id: NodeId) -> Result<bool, RepoError> {
        Ok(self.lock().node(id).is_some())
    }

    fn section_exists(&self, id: SectionId) -> Result<bool, RepoError> {
        Ok(self.lock().sections.contains(&id.0))
    }

    fn class_exists(&self, class: &ClassRef) -> Result<bool, RepoError> {
        Ok(self
            .lock()
            .classes
            .iter()
            .any(|c| class.matches(c.id, &c.identifier)))
    }

    fn fetch_subtree(&self, root: NodeId, request: &FetchRequest) -> Result<Vec<Item>, RepoError> {
        let doc = self.lock();
        if doc.node(root).is_none() {
            return Err(RepoError::NodeNotFound(root));
        }

        let mut candidates = Vec::new();
        doc.collect_descendants(root, request.depth, &mut candidates);

        let mut items = Vec::new();
        for id in candidates {
            if let Some(node) = doc.node(id) {
                let item = doc.item(node)?;
                if request.matches(&item) {
                    items.push(item);
                }
            }
        }
        items.sort_by(|a, b| request.sort.compare(a, b));

        let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
        if offset >= items.len() {
            return Ok(Vec::new());
        }
        Ok(items.split_off(offset))
    }

    fn set_item_section(&self, node: NodeId, section: SectionId) -> Result<(), RepoError> {
        let mut doc = self.lock();
        doc.node_mut(node)
            .ok_or(RepoError::NodeNotFound(node))?
            .section = section.0;
        self.flush(&doc)
    }

    fn relocate_item(&self, node: NodeId) -> Result<(), RepoError> {
        let mut doc = self.lock();
        let archive = doc.archive_node.ok_or(RepoError::NoArchiveNode)?;
        doc.node_mut(node)
            .ok_or(RepoError::NodeNotFound(node))?
            .parent = Some(archive);
        self.flush(&doc)
    }

    fn hide_item(&self, node: NodeId) -> Result<(), RepoError> {
        let mut doc = self.lock();
        doc.node_mut(node)
            .ok_or(RepoError::NodeNotFound(node))?
            .hidden = true;
        self.flush(&doc)
    }

    fn delete_item(&self, node: NodeId, mode: DeleteMode) -> Result<(), RepoError> {
        let mut doc = self.lock();
        if doc.node(node).is_none() {
            return Err(RepoError::NodeNotFound(node));
        }
        let detached = doc.detach_subtree(node);
        if mode == DeleteMode::Trash {
            doc.trash.extend(detached);
        }
        self.flush(&doc)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
