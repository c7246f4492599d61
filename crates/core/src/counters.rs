// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run action counters

use crate::job::ActionKind;
use std::collections::BTreeMap;

/// Counts successful actions per (job, action) pair plus a grand total.
///
/// Owned by the run and mutated only by the action pipeline; the reporter
/// reads it once the run completes.
#[derive(Debug, Clone, Default)]
pub struct RunCounters {
    per_action: BTreeMap<(String, ActionKind), u64>,
    total: u64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful action for a job
    pub fn record(&mut self, job: &str, action: ActionKind) {
        *self
            .per_action
            .entry((job.to_string(), action))
            .or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for one (job, action) pair
    pub fn count(&self, job: &str, action: ActionKind) -> u64 {
        self.per_action
            .get(&(job.to_string(), action))
            .copied()
            .unwrap_or(0)
    }

    /// Total successful actions across all jobs
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate (job, action, count) in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ActionKind, u64)> {
        self.per_action
            .iter()
            .map(|((job, action), count)| (job.as_str(), *action, *count))
    }
}
