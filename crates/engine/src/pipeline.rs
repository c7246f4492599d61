// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-item action application.
//!
//! Actions run in declared order and are counted individually. There is no
//! transactional grouping: a failed persist does not stop the item's
//! remaining actions, but the first failure is surfaced afterwards and is
//! fatal to the job.

use crate::error::EngineError;
use crate::report::Reporter;
use arkiv_core::{Action, ContentRepository, GlobalSettings, Item, RunCounters};

/// Apply a job's actions to one matched item, in declared order.
///
/// `change_section` is a no-op for items whose current section is not a
/// mapping key. Every successful action increments the (job, action)
/// counter and the grand total.
pub fn apply_actions<R: ContentRepository>(
    repo: &R,
    global: &GlobalSettings,
    job_name: &str,
    actions: &[Action],
    item: &Item,
    counters: &mut RunCounters,
    reporter: &mut dyn Reporter,
) -> Result<(), EngineError> {
    // Tracks the section across actions so a change earlier in the list is
    // seen by later lookups.
    let mut section = item.section;
    let mut first_error: Option<EngineError> = None;

    for action in actions {
        let result = match action {
            Action::ChangeSection { mappings } => {
                let Some(&target) = mappings.get(&section) else {
                    continue;
                };
                reporter.message(&format!(
                    "Changing section ID from {} to {} for item '{}' (node {})",
                    section, target, item.name, item.node
                ));
                repo.set_item_section(item.node, target).map(|()| {
                    section = target;
                })
            }
            Action::Move => {
                reporter.message(&format!(
                    "Moving item '{}' (node {}) to the archive location",
                    item.name, item.node
                ));
                repo.relocate_item(item.node)
            }
            Action::Hide => {
                reporter.message(&format!("Hiding item '{}' (node {})", item.name, item.node));
                repo.hide_item(item.node)
            }
            Action::Delete => {
                reporter.message(&format!(
                    "Deleting item '{}' (node {}, mode {})",
                    item.name, item.node, global.delete_mode
                ));
                repo.delete_item(item.node, global.delete_mode)
            }
        };

        match result {
            Ok(()) => counters.record(job_name, action.kind()),
            Err(err) => {
                tracing::warn!(
                    job = job_name,
                    node = %item.node,
                    action = %action.kind(),
                    error = %err,
                    "action failed"
                );
                reporter.message(&format!(
                    "Failed to apply {} to node {}: {}",
                    action.kind(),
                    item.node,
                    err
                ));
                if first_error.is_none() {
                    first_error = Some(err.into());
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
