// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory content store for tests.
//!
//! Behaves like the real store (tree fetches, persisted mutations) and
//! additionally records every mutating call for assertions.

use arkiv_core::{
    ClassRef, ContentRepository, DeleteMode, FetchRequest, Item, NodeId, RepoError, SectionId,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Recorded mutating call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    SetSection { node: NodeId, section: SectionId },
    Relocate { node: NodeId },
    Hide { node: NodeId },
    Delete { node: NodeId, mode: DeleteMode },
}

#[derive(Debug, Clone)]
struct StoredClass {
    id: u64,
    identifier: String,
}

#[derive(Debug, Clone)]
struct StoredNode {
    parent: Option<NodeId>,
    item: Item,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: BTreeMap<NodeId, StoredNode>,
    sections: BTreeSet<SectionId>,
    classes: Vec<StoredClass>,
    archive_node: Option<NodeId>,
    trash: Vec<NodeId>,
    calls: Vec<RepoCall>,
}

/// In-memory content store with call recording
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section
    pub fn add_section(&self, id: SectionId) {
        self.lock().sections.insert(id);
    }

    /// Register a content class
    pub fn add_class(&self, id: u64, identifier: &str) {
        self.lock().classes.push(StoredClass {
            id,
            identifier: identifier.to_string(),
        });
    }

    /// Designate the node that `relocate_item` moves items under
    pub fn set_archive_node(&self, node: NodeId) {
        self.lock().archive_node = Some(node);
    }

    /// Insert a node into the tree
    pub fn add_item(&self, parent: Option<NodeId>, item: Item) {
        self.lock().nodes.insert(item.node, StoredNode { parent, item });
    }

    /// Get all recorded mutating calls
    pub fn calls(&self) -> Vec<RepoCall> {
        self.lock().calls.clone()
    }

    /// Current state of an item, if it is still in the tree
    pub fn item(&self, node: NodeId) -> Option<Item> {
        self.lock().nodes.get(&node).map(|n| n.item.clone())
    }

    /// Current parent of a node
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.lock().nodes.get(&node).and_then(|n| n.parent)
    }

    /// Nodes moved to the trash, in deletion order
    pub fn trashed(&self) -> Vec<NodeId> {
        self.lock().trash.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Inner {
    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parent == Some(parent))
            .map(|(id, _)| *id)
            .collect()
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

    fn remove_subtree(&mut self, root: NodeId) -> Vec<NodeId> {
        let mut removed = vec![root];
        self.collect_descendants(root, None, &mut removed);
        for id in &removed {
            self.nodes.remove(id);
        }
        removed
    }
}

impl ContentRepository for MemoryStore {
    fn node_exists(&self, id: NodeId) -> Result<bool, RepoError> {
        Ok(self.lock().nodes.contains_key(&id))
    }

    fn section_exists(&self, id: SectionId) -> Result<bool, RepoError> {
        Ok(self.lock().sections.contains(&id))
    }

    fn class_exists(&self, class: &ClassRef) -> Result<bool, RepoError> {
        Ok(self
            .lock()
            .classes
            .iter()
            .any(|c| class.matches(c.id, &c.identifier)))
    }

    fn fetch_subtree(&self, root: NodeId, request: &FetchRequest) -> Result<Vec<Item>, RepoError> {
        let inner = self.lock();
        if !inner.nodes.contains_key(&root) {
            return Err(RepoError::NodeNotFound(root));
        }

        let mut candidates = Vec::new();
        inner.collect_descendants(root, request.depth, &mut candidates);

        let mut items: Vec<Item> = candidates
            .into_iter()
            .filter_map(|id| inner.nodes.get(&id).map(|n| n.item.clone()))
            .filter(|item| request.matches(item))
            .collect();
        items.sort_by(|a, b| request.sort.compare(a, b));

        let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
        if offset >= items.len() {
            return Ok(Vec::new());
        }
        Ok(items.split_off(offset))
    }

    fn set_item_section(&self, node: NodeId, section: SectionId) -> Result<(), RepoError> {
        let mut inner = self.lock();
        inner.calls.push(RepoCall::SetSection { node, section });
        let stored = inner
            .nodes
            .get_mut(&node)
            .ok_or(RepoError::NodeNotFound(node))?;
        stored.item.section = section;
        Ok(())
    }

    fn relocate_item(&self, node: NodeId) -> Result<(), RepoError> {
        let mut inner = self.lock();
        inner.calls.push(RepoCall::Relocate { node });
        let archive = inner.archive_node.ok_or(RepoError::NoArchiveNode)?;
        let stored = inner
            .nodes
            .get_mut(&node)
            .ok_or(RepoError::NodeNotFound(node))?;
        stored.parent = Some(archive);
        Ok(())
    }

    fn hide_item(&self, node: NodeId) -> Result<(), RepoError> {
        let mut inner = self.lock();
        inner.calls.push(RepoCall::Hide { node });
        let stored = inner
            .nodes
            .get_mut(&node)
            .ok_or(RepoError::NodeNotFound(node))?;
        stored.item.hidden = true;
        Ok(())
    }

    fn delete_item(&self, node: NodeId, mode: DeleteMode) -> Result<(), RepoError> {
        let mut inner = self.lock();
        inner.calls.push(RepoCall::Delete { node, mode });
        if !inner.nodes.contains_key(&node) {
            return Err(RepoError::NodeNotFound(node));
        }
        inner.remove_subtree(node);
        if mode == DeleteMode::Trash {
            inner.trash.push(node);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
