// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `arkiv check` - validate the configuration without mutating anything

use anyhow::Result;
use std::path::Path;

pub fn check(config_path: &Path, store_path: &Path) -> Result<()> {
    let (_store, set) = super::validated_job_set(config_path, store_path)?;
    println!("Configuration OK ({} job(s))", set.jobs.len());
    Ok(())
}
