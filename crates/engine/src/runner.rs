// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: jobs, entry points, selection, actions.
//!
//! Jobs run in name order; a failing job is reported and does not stop the
//! remaining jobs, but it turns the final result false.

use crate::error::EngineError;
use crate::pipeline::apply_actions;
use crate::report::Reporter;
use crate::selector::Selector;
use arkiv_core::{Clock, ContentRepository, Job, JobSet, RunCounters};

/// Outcome of one full run
#[derive(Debug)]
pub struct RunReport {
    pub success: bool,
    pub counters: RunCounters,
}

/// Executes every job in a validated job set, one repository call at a time
pub struct Runner<'a, R, C> {
    repo: &'a R,
    clock: &'a C,
}

impl<'a, R: ContentRepository, C: Clock> Runner<'a, R, C> {
    pub fn new(repo: &'a R, clock: &'a C) -> Self {
        Self { repo, clock }
    }

    /// Run every job to completion and report aggregate counts
    pub fn run(&self, set: &JobSet, reporter: &mut dyn Reporter) -> RunReport {
        let mut counters = RunCounters::new();
        let mut success = true;

        for (name, job) in &set.jobs {
            reporter.message(&format!("Processing archive job: '{}'", name));
            tracing::info!(job = %name, "processing job");

            if let Err(err) = self.run_job(set, job, &mut counters, reporter) {
                tracing::error!(job = %name, error = %err, "job failed");
                reporter.message(&format!("Error occurred in processing job {}: {}", name, err));
                success = false;
            }
        }

        reporter.message(&format!("Total processed nodes: {}", counters.total()));
        RunReport { success, counters }
    }

    fn run_job(
        &self,
        set: &JobSet,
        job: &Job,
        counters: &mut RunCounters,
        reporter: &mut dyn Reporter,
    ) -> Result<(), EngineError> {
        let selector = Selector::new(self.repo, self.clock, &set.global);

        for entry in &job.entry_points {
            reporter.message(&format!(
                "Fetching nodes for node ID: '{}' ({})",
                entry.node, entry.fetch_mode
            ));

            for batch in selector.select(job, entry)? {
                reporter.message(&format!("Number of fetched nodes: {}", batch.items.len()));

                if batch.items.is_empty() {
                    reporter.message("Nothing to process.");
                    continue;
                }

                reporter.message(&format!("Archiving nodes in parent node {}...", batch.root));
                for item in &batch.items {
                    reporter.message(&format!("Processing node {}", item.name));
                    apply_actions(
                        self.repo,
                        &set.global,
                        &job.name,
                        &job.actions,
                        item,
                        counters,
                        reporter,
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
