// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands.
//!
//! Pure presentation: nothing here touches the repository.

use arkiv_core::{Action, Job, RunCounters};

const BANNER: &str = "##############################################";

/// Human-readable dump of one validated job
pub fn describe_job(job: &Job) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("# Job settings for {}:\n", job.name));

    for entry in &job.entry_points {
        out.push_str(&format!(
            "#   node {} ({}), filter: {}\n",
            entry.node, entry.fetch_mode, entry.filter
        ));
        if let Some(filter) = entry.class_filter.effective() {
            let classes: Vec<String> = filter.classes.iter().map(|c| c.to_string()).collect();
            out.push_str(&format!(
                "#     class filter: {} [{}]\n",
                filter.mode,
                classes.join(", ")
            ));
        }
    }

    for (operator, sections) in &job.section_filter {
        let ids: Vec<String> = sections.iter().map(|s| s.to_string()).collect();
        out.push_str(&format!(
            "#   sections {}: [{}]\n",
            operator,
            ids.join(", ")
        ));
    }

    for action in &job.actions {
        match action {
            Action::ChangeSection { mappings } => {
                let pairs: Vec<String> = mappings
                    .iter()
                    .map(|(from, to)| format!("{} -> {}", from, to))
                    .collect();
                out.push_str(&format!(
                    "#   action change_section: {{{}}}\n",
                    pairs.join(", ")
                ));
            }
            other => out.push_str(&format!("#   action {}\n", other.kind())),
        }
    }

    out.push_str(BANNER);
    out
}

/// Per-action counts after a run
pub fn print_counters(counters: &RunCounters) {
    for (job, action, count) in counters.iter() {
        println!("{}: {} x {}", job, action, count);
    }
}
