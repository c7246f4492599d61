// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod jobs;
pub mod run;

use anyhow::{Context, Result};
use arkiv_adapters::JsonStore;
use arkiv_config::{build_job_set, load_config};
use arkiv_core::JobSet;
use std::path::Path;

/// Load the configuration, open the store, and validate the job set.
///
/// Validation failures are printed to stderr, one numbered reason per job,
/// before the command bails.
pub(crate) fn validated_job_set(config_path: &Path, store_path: &Path) -> Result<(JsonStore, JobSet)> {
    let config = load_config(config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    let store = JsonStore::open(store_path)
        .with_context(|| format!("opening content store {}", store_path.display()))?;

    match build_job_set(&config, &store) {
        Ok(set) => Ok((store, set)),
        Err(errors) => {
            eprint!("{}", errors);
            anyhow::bail!("configuration validation failed")
        }
    }
}
