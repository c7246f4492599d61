// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic validation: raw settings to a validated `JobSet`.
//!
//! All checking happens here so no additional checking is needed while
//! processing jobs. The first failure is terminal for its job; the builder
//! collects one failure per job and aborts the whole run if any job fails,
//! so no job in the set executes against a partially valid configuration.

use crate::filter::FilterParseError;
use crate::types::{RawArchiveSettings, RawConfig, RawJobSettings};
use arkiv_core::{
    Action, ClassFilterMode, ClassFilterSpec, ClassRef, ContentRepository, DeleteMode, EntryPoint,
    FetchMode, Filter, GlobalSettings, Job, JobSet, NodeId, RepoError, SectionFilterSpec,
    SectionId, SectionOperator,
};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A validation failure, naming the job and the offending field
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid delete action '{value}' in global settings")]
    InvalidDeleteMode { value: String },
    #[error("no jobs listed in available_jobs")]
    NoJobs,
    #[error("no job table for job: {job}")]
    MissingJobSection { job: String },
    #[error("no parent nodes specified for job: {job}")]
    MissingEntryPoints { job: String },
    #[error("no node filters specified for job: {job}")]
    MissingFilters { job: String },
    #[error("invalid {field} key '{value}' for job: {job}")]
    InvalidId {
        job: String,
        field: &'static str,
        value: String,
    },
    #[error("invalid fetch mode '{value}' for node {node} for job: {job}")]
    InvalidFetchMode {
        job: String,
        node: NodeId,
        value: String,
    },
    #[error("there's no filter for node {node} for job: {job}")]
    NoFilterForEntryPoint { job: String, node: NodeId },
    #[error("nonexistent parent node {node} for job: {job}")]
    NonexistentNode { job: String, node: NodeId },
    #[error("node {node} in node filters doesn't exist in parent nodes for job: {job}")]
    UnknownNodeInFilter { job: String, node: NodeId },
    #[error("invalid filter '[{node}]={expr}' for job: {job}")]
    InvalidFilter {
        job: String,
        node: NodeId,
        expr: String,
        #[source]
        source: FilterParseError,
    },
    #[error("invalid operator '{value}' in section filter for section {section} for job: {job}")]
    InvalidSectionOperator {
        job: String,
        section: SectionId,
        value: String,
    },
    #[error("nonexistent section {section} in {context} for job: {job}")]
    NonexistentSection {
        job: String,
        section: SectionId,
        context: &'static str,
    },
    #[error("invalid class filter type '{value}' in {context} for job: {job}")]
    InvalidClassFilterType {
        job: String,
        value: String,
        context: String,
    },
    #[error("nonexistent class '{class}' in {context} for job: {job}")]
    NonexistentClass {
        job: String,
        class: ClassRef,
        context: String,
    },
    #[error("node {node} in {field} doesn't exist in parent nodes for job: {job}")]
    UnknownNodeInClassFilter {
        job: String,
        node: NodeId,
        field: &'static str,
    },
    #[error("no actions to perform for job: {job}")]
    NoActions { job: String },
    #[error("unrecognized action '{action}' for job: {job}")]
    UnrecognizedAction { job: String, action: String },
    #[error("no section mappings for the change_section action for job: {job}")]
    MissingSectionMappings { job: String },
    #[error("delete action declared but deletes are not allowed for job: {job}")]
    DeleteNotAllowed { job: String },
    #[error("repository error during validation: {0}")]
    Repo(#[from] RepoError),
}

/// One first-encountered failure per invalid job, or a single global failure
#[derive(Debug)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "configuration validation failed with {} error(s):",
            self.errors.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate the global `[archive]` settings.
///
/// A failure here aborts the entire run before any job is examined.
pub fn validate_global(raw: &RawArchiveSettings) -> Result<GlobalSettings, ValidationError> {
    let delete_action = raw.delete_action.as_deref().unwrap_or("");
    let delete_mode = DeleteMode::parse(delete_action).ok_or_else(|| {
        ValidationError::InvalidDeleteMode {
            value: delete_action.to_string(),
        }
    })?;

    // Effectively true only for the exact affirmative literal
    let allow_delete = raw.allow_delete.as_deref() == Some("yes");

    // Container classes stay unresolved here; they are an opaque list the
    // selector hands to the repository as an include filter.
    let container_classes = raw
        .container_classes
        .iter()
        .map(|token| ClassRef::parse(token))
        .collect();

    Ok(GlobalSettings {
        delete_mode,
        allow_delete,
        container_classes,
    })
}

/// Validate one job's raw settings into a `Job`.
///
/// Checks run in a fixed order and the first failure is terminal for the
/// job; see the module docs.
pub fn validate_job<R: ContentRepository>(
    name: &str,
    raw: &RawJobSettings,
    global: &GlobalSettings,
    repo: &R,
) -> Result<Job, ValidationError> {
    let job = || name.to_string();

    if raw.parent_nodes.is_empty() {
        return Err(ValidationError::MissingEntryPoints { job: job() });
    }
    if raw.node_filters.is_empty() {
        return Err(ValidationError::MissingFilters { job: job() });
    }

    // Entry points under construction: fetch mode first, filter and class
    // filter attached by the later passes.
    struct Partial {
        fetch_mode: FetchMode,
        filter: Option<Filter>,
        class_filter: ClassFilterSpec,
    }
    let mut entries: BTreeMap<NodeId, Partial> = BTreeMap::new();

    // Parent nodes
    for (key, mode) in &raw.parent_nodes {
        let node = parse_node_id(name, "parent_nodes", key)?;

        let fetch_mode =
            FetchMode::parse(mode).ok_or_else(|| ValidationError::InvalidFetchMode {
                job: job(),
                node,
                value: mode.clone(),
            })?;

        if !raw.node_filters.contains_key(key) {
            return Err(ValidationError::NoFilterForEntryPoint { job: job(), node });
        }

        if !repo.node_exists(node)? {
            return Err(ValidationError::NonexistentNode { job: job(), node });
        }

        entries.insert(
            node,
            Partial {
                fetch_mode,
                filter: None,
                class_filter: ClassFilterSpec::default(),
            },
        );
    }

    // Node filters
    for (key, expr) in &raw.node_filters {
        let node = parse_node_id(name, "node_filters", key)?;

        let Some(entry) = entries.get_mut(&node) else {
            return Err(ValidationError::UnknownNodeInFilter { job: job(), node });
        };

        let filter =
            crate::filter::parse_filter(expr).map_err(|source| ValidationError::InvalidFilter {
                job: job(),
                node,
                expr: expr.clone(),
                source,
            })?;
        entry.filter = Some(filter);
    }

    // Section filters
    let mut section_filter = SectionFilterSpec::new();
    for (key, operator) in &raw.section_filters {
        let section = parse_section_id(name, "section_filters", key)?;

        let operator =
            SectionOperator::parse(operator).ok_or_else(|| {
                ValidationError::InvalidSectionOperator {
                    job: job(),
                    section,
                    value: operator.clone(),
                }
            })?;

        if !repo.section_exists(section)? {
            return Err(ValidationError::NonexistentSection {
                job: job(),
                section,
                context: "section filters",
            });
        }

        section_filter.entry(operator).or_default().insert(section);
    }

    // Job-wide class filter default
    let global_mode = match &raw.global_class_filter_type {
        Some(value) => Some(ClassFilterMode::parse(value).ok_or_else(|| {
            ValidationError::InvalidClassFilterType {
                job: job(),
                value: value.clone(),
                context: "global class filter type".to_string(),
            }
        })?),
        None => None,
    };

    let mut global_classes = Vec::new();
    for token in &raw.global_class_filter_array {
        let class = ClassRef::parse(token);
        if !repo.class_exists(&class)? {
            return Err(ValidationError::NonexistentClass {
                job: job(),
                class,
                context: "global class filter array".to_string(),
            });
        }
        global_classes.push(class);
    }

    // The job-wide default applies to every entry point when both halves
    // are declared; per-node settings below override it.
    if let Some(mode) = global_mode {
        if !global_classes.is_empty() {
            for entry in entries.values_mut() {
                entry.class_filter = ClassFilterSpec {
                    mode: Some(mode),
                    classes: Some(global_classes.clone()),
                };
            }
        }
    }

    // Per-entry-point class filter type overrides
    for (key, value) in &raw.class_filter_types {
        let node = parse_node_id(name, "class_filter_types", key)?;

        let Some(entry) = entries.get_mut(&node) else {
            return Err(ValidationError::UnknownNodeInClassFilter {
                job: job(),
                node,
                field: "class filter types",
            });
        };

        let mode = ClassFilterMode::parse(value).ok_or_else(|| {
            ValidationError::InvalidClassFilterType {
                job: job(),
                value: value.clone(),
                context: format!("class filter type for node {}", node),
            }
        })?;
        entry.class_filter.mode = Some(mode);
    }

    // Per-entry-point class filter array overrides
    for (key, tokens) in &raw.class_filter_arrays {
        let node = parse_node_id(name, "class_filter_arrays", key)?;

        if !entries.contains_key(&node) {
            return Err(ValidationError::UnknownNodeInClassFilter {
                job: job(),
                node,
                field: "class filter arrays",
            });
        }

        let mut classes = Vec::new();
        for token in tokens {
            let class = ClassRef::parse(token);
            if !repo.class_exists(&class)? {
                return Err(ValidationError::NonexistentClass {
                    job: job(),
                    class,
                    context: format!("class filter array for node {}", node),
                });
            }
            classes.push(class);
        }

        if let Some(entry) = entries.get_mut(&node) {
            entry.class_filter.classes = Some(classes);
        }
    }

    // Actions
    if raw.actions.is_empty() {
        return Err(ValidationError::NoActions { job: job() });
    }

    let mut actions = Vec::new();
    for action in &raw.actions {
        match action.as_str() {
            "change_section" => {
                if raw.section_mappings.is_empty() {
                    return Err(ValidationError::MissingSectionMappings { job: job() });
                }

                let mut mappings = BTreeMap::new();
                for (key, to) in &raw.section_mappings {
                    let from = parse_section_id(name, "section_mappings", key)?;
                    let to = SectionId(*to);

                    if !repo.section_exists(from)? {
                        return Err(ValidationError::NonexistentSection {
                            job: job(),
                            section: from,
                            context: "section mappings (from)",
                        });
                    }
                    if !repo.section_exists(to)? {
                        return Err(ValidationError::NonexistentSection {
                            job: job(),
                            section: to,
                            context: "section mappings (to)",
                        });
                    }

                    mappings.insert(from, to);
                }
                actions.push(Action::ChangeSection { mappings });
            }
            "move" => actions.push(Action::Move),
            "hide" => actions.push(Action::Hide),
            "delete" => {
                if !global.allow_delete {
                    return Err(ValidationError::DeleteNotAllowed { job: job() });
                }
                actions.push(Action::Delete);
            }
            other => {
                return Err(ValidationError::UnrecognizedAction {
                    job: job(),
                    action: other.to_string(),
                });
            }
        }
    }

    // Assemble: every entry point now has exactly one filter
    let mut entry_points = Vec::with_capacity(entries.len());
    for (node, partial) in entries {
        let Some(filter) = partial.filter else {
            return Err(ValidationError::NoFilterForEntryPoint { job: job(), node });
        };
        entry_points.push(EntryPoint {
            node,
            fetch_mode: partial.fetch_mode,
            filter,
            class_filter: partial.class_filter,
        });
    }

    Ok(Job {
        name: name.to_string(),
        entry_points,
        section_filter,
        actions,
    })
}

/// Validate the whole configuration into a runnable `JobSet`.
///
/// A global-settings failure aborts before any job is examined. Otherwise
/// every listed job is validated and the first-encountered reason per
/// failing job is collected; any failure prevents every job from running.
pub fn build_job_set<R: ContentRepository>(
    config: &RawConfig,
    repo: &R,
) -> Result<JobSet, ValidationErrors> {
    let global = validate_global(&config.archive).map_err(|e| ValidationErrors {
        errors: vec![e],
    })?;

    if config.archive.available_jobs.is_empty() {
        return Err(ValidationErrors {
            errors: vec![ValidationError::NoJobs],
        });
    }

    let mut jobs = BTreeMap::new();
    let mut errors = Vec::new();

    for name in &config.archive.available_jobs {
        let Some(raw) = config.job.get(name) else {
            errors.push(ValidationError::MissingJobSection { job: name.clone() });
            continue;
        };
        match validate_job(name, raw, &global, repo) {
            Ok(validated) => {
                jobs.insert(name.clone(), validated);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(JobSet { global, jobs })
    } else {
        Err(ValidationErrors { errors })
    }
}

fn parse_node_id(
    job: &str,
    field: &'static str,
    key: &str,
) -> Result<NodeId, ValidationError> {
    key.parse().map_err(|_| ValidationError::InvalidId {
        job: job.to_string(),
        field,
        value: key.to_string(),
    })
}

fn parse_section_id(
    job: &str,
    field: &'static str,
    key: &str,
) -> Result<SectionId, ValidationError> {
    key.parse().map_err(|_| ValidationError::InvalidId {
        job: job.to_string(),
        field,
        value: key.to_string(),
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
