// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `arkiv jobs` - print the validated job definitions

use crate::output;
use anyhow::Result;
use std::path::Path;

pub fn jobs(config_path: &Path, store_path: &Path) -> Result<()> {
    let (_store, set) = super::validated_job_set(config_path, store_path)?;
    for job in set.jobs.values() {
        println!("{}", output::describe_job(job));
    }
    Ok(())
}
