// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node selection: tree walk, container expansion, filter composition.
//!
//! The shape of the walk depends on the entry point's fetch mode:
//! `tree` fetches the full subtree, `list` direct children only, and
//! `list_recursive` first discovers container nodes level by level and
//! runs a depth-1 fetch at every discovered root.

use crate::error::EngineError;
use arkiv_core::{
    AttributeClause, ClassFilter, ClassFilterMode, Clock, ContentRepository, EntryPoint,
    FetchMode, FetchRequest, Filter, GlobalSettings, Item, Job, NodeId, SectionFilterSpec,
    SectionOperator, SortOrder,
};

/// Levels of container recursion tolerated before assuming a corrupt store.
///
/// The hierarchy is a tree, so this never fires on healthy data.
const MAX_CONTAINER_DEPTH: u32 = 64;

/// Matched items fetched under one visited root
#[derive(Debug, Clone)]
pub struct Batch {
    pub root: NodeId,
    pub items: Vec<Item>,
}

/// Selects matching items for one entry point at a time
pub struct Selector<'a, R, C> {
    repo: &'a R,
    clock: &'a C,
    global: &'a GlobalSettings,
}

impl<'a, R: ContentRepository, C: Clock> Selector<'a, R, C> {
    pub fn new(repo: &'a R, clock: &'a C, global: &'a GlobalSettings) -> Self {
        Self {
            repo,
            clock,
            global,
        }
    }

    /// Select all matching items for `entry`, one batch per visited root.
    ///
    /// With `list_recursive`, discovered containers are visited before the
    /// originating node, and every level reuses the entry point's own
    /// filter and class filter. Container-fetch results only discover
    /// further roots; they are never yielded as matches themselves.
    pub fn select(&self, job: &Job, entry: &EntryPoint) -> Result<Vec<Batch>, EngineError> {
        let mut batches = Vec::new();
        self.visit(job, entry, entry.node, 0, &mut batches)?;
        Ok(batches)
    }

    fn visit(
        &self,
        job: &Job,
        entry: &EntryPoint,
        root: NodeId,
        depth: u32,
        out: &mut Vec<Batch>,
    ) -> Result<(), EngineError> {
        if depth > MAX_CONTAINER_DEPTH {
            return Err(EngineError::ContainerDepthExceeded {
                root: entry.node,
                limit: MAX_CONTAINER_DEPTH,
            });
        }

        let section_clauses = section_clauses(&job.section_filter);

        if entry.fetch_mode == FetchMode::ListRecursive {
            let request = FetchRequest {
                depth: Some(1),
                offset: 0,
                class_filter: Some(ClassFilter {
                    mode: ClassFilterMode::Include,
                    classes: self.global.container_classes.clone(),
                }),
                clauses: section_clauses.clone(),
                sort: SortOrder::NodeAsc,
            };
            let containers = self.repo.fetch_subtree(root, &request)?;
            tracing::debug!(root = %root, count = containers.len(), "expanding containers");
            for container in &containers {
                self.visit(job, entry, container.node, depth + 1, out)?;
            }
        }

        let mut clauses = section_clauses;
        let mut offset = 0;
        match entry.filter {
            Filter::MoreThan { offset: skip } => offset = skip,
            Filter::OlderThan { seconds } => {
                let period =
                    chrono::Duration::seconds(i64::try_from(seconds).unwrap_or(i64::MAX));
                clauses.push(AttributeClause::PublishedBefore(self.clock.now() - period));
            }
        }

        let request = FetchRequest {
            depth: match entry.fetch_mode {
                FetchMode::Tree => None,
                FetchMode::List | FetchMode::ListRecursive => Some(1),
            },
            offset,
            class_filter: entry.class_filter.effective(),
            clauses,
            sort: SortOrder::PublishedDesc,
        };
        let items = self.repo.fetch_subtree(root, &request)?;
        tracing::debug!(root = %root, count = items.len(), "primary fetch");
        out.push(Batch { root, items });
        Ok(())
    }
}

fn section_clauses(spec: &SectionFilterSpec) -> Vec<AttributeClause> {
    spec.iter()
        .map(|(operator, sections)| match operator {
            SectionOperator::In => AttributeClause::SectionIn(sections.clone()),
            SectionOperator::NotIn => AttributeClause::SectionNotIn(sections.clone()),
        })
        .collect()
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
