// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The validated job model.
//!
//! Everything here is produced by the configuration validator and is
//! immutable for the duration of one run. No field ever needs re-checking
//! against the repository: every reference was resolved at build time.

use crate::id::{ClassRef, NodeId, SectionId};
use crate::settings::GlobalSettings;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How nodes are gathered under an entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Full subtree below the entry point
    Tree,
    /// Direct children only
    List,
    /// Direct children, expanding container nodes recursively
    ListRecursive,
}

impl FetchMode {
    /// Parse the configuration literal, `tree`, `list`, or `list_recursive`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tree" => Some(FetchMode::Tree),
            "list" => Some(FetchMode::List),
            "list_recursive" => Some(FetchMode::ListRecursive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMode::Tree => "tree",
            FetchMode::List => "list",
            FetchMode::ListRecursive => "list_recursive",
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-entry-point match filter; exactly one attaches to each entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Items published earlier than now minus this many seconds
    OlderThan { seconds: u64 },
    /// Skip the first `offset` items in sort order
    MoreThan { offset: u64 },
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::OlderThan { seconds } => write!(f, "older_than {}s", seconds),
            Filter::MoreThan { offset } => write!(f, "more_than {}", offset),
        }
    }
}

/// Include or exclude the listed classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFilterMode {
    Include,
    Exclude,
}

impl ClassFilterMode {
    /// Parse the configuration literal, `include` or `exclude`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "include" => Some(ClassFilterMode::Include),
            "exclude" => Some(ClassFilterMode::Exclude),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassFilterMode::Include => "include",
            ClassFilterMode::Exclude => "exclude",
        }
    }
}

impl fmt::Display for ClassFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved include/exclude class predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFilter {
    pub mode: ClassFilterMode,
    pub classes: Vec<ClassRef>,
}

/// Two-stage class filter: job-wide default, then per-node override.
///
/// The mode and the class list override independently. The filter only
/// takes effect once both halves are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFilterSpec {
    pub mode: Option<ClassFilterMode>,
    pub classes: Option<Vec<ClassRef>>,
}

impl ClassFilterSpec {
    /// The effective filter, if both mode and class list are set
    pub fn effective(&self) -> Option<ClassFilter> {
        match (self.mode, &self.classes) {
            (Some(mode), Some(classes)) => Some(ClassFilter {
                mode,
                classes: classes.clone(),
            }),
            _ => None,
        }
    }
}

/// Section filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionOperator {
    In,
    NotIn,
}

impl SectionOperator {
    /// Parse the configuration literal, `in` or `not_in`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(SectionOperator::In),
            "not_in" => Some(SectionOperator::NotIn),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionOperator::In => "in",
            SectionOperator::NotIn => "not_in",
        }
    }
}

impl fmt::Display for SectionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sections to match or reject, at most one set per operator.
///
/// Sections under the same operator are OR'd; the operators themselves are
/// AND'd with every other predicate at traversal time.
pub type SectionFilterSpec = BTreeMap<SectionOperator, BTreeSet<SectionId>>;

/// One configured root to archive from
#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub node: NodeId,
    pub fetch_mode: FetchMode,
    pub filter: Filter,
    pub class_filter: ClassFilterSpec,
}

/// An archive action applied to each matched item, in declared order
#[derive(Debug, Clone)]
pub enum Action {
    /// Re-section items whose current section appears in the mapping
    ChangeSection {
        mappings: BTreeMap<SectionId, SectionId>,
    },
    /// Relocate the item under the repository's archive node
    Move,
    /// Hide the item
    Hide,
    /// Delete the item, honoring the global delete mode
    Delete,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ChangeSection { .. } => ActionKind::ChangeSection,
            Action::Move => ActionKind::Move,
            Action::Hide => ActionKind::Hide,
            Action::Delete => ActionKind::Delete,
        }
    }
}

/// Action discriminant used for counting and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    ChangeSection,
    Move,
    Hide,
    Delete,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ChangeSection => "change_section",
            ActionKind::Move => "move",
            ActionKind::Hide => "hide",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, validated archive job
#[derive(Debug, Clone)]
pub struct Job {
    pub name: String,
    /// Ordered by node ID for deterministic runs
    pub entry_points: Vec<EntryPoint>,
    pub section_filter: SectionFilterSpec,
    pub actions: Vec<Action>,
}

/// Validated global settings plus every validated job, ready to run.
///
/// Built once per run and destroyed at run end; never persisted.
#[derive(Debug, Clone)]
pub struct JobSet {
    pub global: GlobalSettings,
    pub jobs: BTreeMap<String, Job>,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
