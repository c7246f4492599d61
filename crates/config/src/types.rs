// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw configuration types that mirror the TOML structure exactly.
//!
//! These types are used for parsing only. They are converted to the
//! validated job model by the `validate` module. Map-shaped settings keep
//! their string keys here; numeric IDs are parsed during validation so a
//! malformed key is reported with its job and field.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The whole configuration document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// The global `[archive]` table
    pub archive: RawArchiveSettings,
    /// One `[job.<name>]` table per job
    pub job: BTreeMap<String, RawJobSettings>,
}

/// The global `[archive]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArchiveSettings {
    /// Names of the job tables to load
    pub available_jobs: Vec<String>,
    /// `delete` or `move_to_trash`
    pub delete_action: Option<String>,
    /// Classes treated as structural containers, by ID or identifier
    pub container_classes: Vec<String>,
    /// Exactly `yes` enables the delete action
    pub allow_delete: Option<String>,
}

/// One `[job.<name>]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawJobSettings {
    /// Entry-point node ID -> fetch mode (`tree`, `list`, `list_recursive`)
    pub parent_nodes: BTreeMap<String, String>,
    /// Entry-point node ID -> filter expression
    pub node_filters: BTreeMap<String, String>,
    /// Section ID -> operator (`in`, `not_in`)
    pub section_filters: BTreeMap<String, String>,
    /// Job-wide class filter type (`include`, `exclude`)
    pub global_class_filter_type: Option<String>,
    /// Job-wide class filter classes
    pub global_class_filter_array: Vec<String>,
    /// Per-entry-point class filter type override
    pub class_filter_types: BTreeMap<String, String>,
    /// Per-entry-point class filter class override
    pub class_filter_arrays: BTreeMap<String, Vec<String>>,
    /// Ordered action names
    pub actions: Vec<String>,
    /// Source section ID -> destination section ID for `change_section`
    pub section_mappings: BTreeMap<String, u64>,
}
