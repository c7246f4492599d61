// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The content repository the validator and engine consume.
//!
//! The repository is an external, possibly slow, shared resource. Every
//! call blocks; the engine issues one call at a time and waits for
//! completion before proceeding.

use crate::id::{ClassRef, NodeId, SectionId};
use crate::item::Item;
use crate::job::{ClassFilter, ClassFilterMode};
use crate::settings::DeleteMode;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors from repository operations
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("store has no archive node configured")]
    NoArchiveNode,
    #[error("corrupt store: {0}")]
    Corrupt(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One predicate clause of a fetch; clauses are AND-combined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeClause {
    /// Item section is one of the listed sections
    SectionIn(BTreeSet<SectionId>),
    /// Item section is none of the listed sections
    SectionNotIn(BTreeSet<SectionId>),
    /// Item published strictly before the instant
    PublishedBefore(DateTime<Utc>),
}

impl AttributeClause {
    /// Whether an item satisfies this clause
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            AttributeClause::SectionIn(sections) => sections.contains(&item.section),
            AttributeClause::SectionNotIn(sections) => !sections.contains(&item.section),
            AttributeClause::PublishedBefore(cutoff) => item.published < *cutoff,
        }
    }
}

impl ClassFilter {
    /// Whether an item's class passes this include/exclude filter
    pub fn matches(&self, item: &Item) -> bool {
        let listed = self
            .classes
            .iter()
            .any(|class| class.matches(item.class_id, &item.class_identifier));
        match self.mode {
            ClassFilterMode::Include => listed,
            ClassFilterMode::Exclude => !listed,
        }
    }
}

/// Result ordering for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Publish time descending; node ID descending breaks ties
    #[default]
    PublishedDesc,
    /// Node ID ascending (stable tree order)
    NodeAsc,
}

impl SortOrder {
    /// Order two items per this sort
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortOrder::PublishedDesc => b
                .published
                .cmp(&a.published)
                .then_with(|| b.node.cmp(&a.node)),
            SortOrder::NodeAsc => a.node.cmp(&b.node),
        }
    }
}

/// Parameters for a subtree fetch
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    /// `Some(1)` fetches direct children; `None` the full subtree
    pub depth: Option<u32>,
    /// Skip the first `offset` results in sort order
    pub offset: u64,
    /// Include/exclude class predicate
    pub class_filter: Option<ClassFilter>,
    /// AND-combined attribute clauses
    pub clauses: Vec<AttributeClause>,
    /// Result ordering, applied before the offset
    pub sort: SortOrder,
}

impl FetchRequest {
    /// Whether an item satisfies the class filter and every clause
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(ref filter) = self.class_filter {
            if !filter.matches(item) {
                return false;
            }
        }
        self.clauses.iter().all(|clause| clause.matches(item))
    }
}

/// Blocking access to the hierarchical content store.
///
/// Implementations use interior mutability; mutating calls persist their
/// effect before returning.
pub trait ContentRepository {
    /// Whether a node exists
    fn node_exists(&self, id: NodeId) -> Result<bool, RepoError>;

    /// Whether a section exists
    fn section_exists(&self, id: SectionId) -> Result<bool, RepoError>;

    /// Whether a class exists, looked up by numeric ID or identifier
    fn class_exists(&self, class: &ClassRef) -> Result<bool, RepoError>;

    /// Fetch descendants of `root` matching the request.
    ///
    /// The root itself is never part of the result. Results are filtered,
    /// sorted, and offset per the request.
    fn fetch_subtree(&self, root: NodeId, request: &FetchRequest) -> Result<Vec<Item>, RepoError>;

    /// Set the section of the item at `node` and persist it
    fn set_item_section(&self, node: NodeId, section: SectionId) -> Result<(), RepoError>;

    /// Relocate the item at `node` under the store's archive node
    fn relocate_item(&self, node: NodeId) -> Result<(), RepoError>;

    /// Mark the item at `node` hidden and persist it
    fn hide_item(&self, node: NodeId) -> Result<(), RepoError>;

    /// Remove the item at `node`, permanently or into the trash
    fn delete_item(&self, node: NodeId, mode: DeleteMode) -> Result<(), RepoError>;
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
