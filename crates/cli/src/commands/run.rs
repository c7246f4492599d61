// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `arkiv run` - validate the configuration and execute every job

use crate::output;
use anyhow::Result;
use arkiv_core::SystemClock;
use arkiv_engine::{Reporter, Runner};
use std::path::Path;

/// Reporter writing progress lines to stdout
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub fn run(config_path: &Path, store_path: &Path) -> Result<()> {
    let (store, set) = super::validated_job_set(config_path, store_path)?;

    let clock = SystemClock;
    let runner = Runner::new(&store, &clock);
    let report = runner.run(&set, &mut ConsoleReporter);

    output::print_counters(&report.counters);
    if !report.success {
        anyhow::bail!("run finished with errors");
    }
    Ok(())
}
