//! `arkiv run` specs

use crate::prelude::{Project, CONFIG, STORE};
use predicates::prelude::*;

fn section_of(store: &serde_json::Value, id: u64) -> u64 {
    store["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"] == id)
        .unwrap()["section"]
        .as_u64()
        .unwrap()
}

#[test]
fn run_changes_mapped_sections_and_reports_totals() {
    let project = Project::new(CONFIG, STORE);
    project
        .arkiv()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing archive job: 'old_news'",
        ))
        .stdout(predicate::str::contains("Number of fetched nodes: 5"))
        .stdout(predicate::str::contains("Total processed nodes: 3"))
        .stdout(predicate::str::contains("old_news: change_section x 3"));

    // Three items moved from section 1 to 2, the section-3 items untouched
    let store = project.store_json();
    assert_eq!(section_of(&store, 2), 2);
    assert_eq!(section_of(&store, 3), 2);
    assert_eq!(section_of(&store, 5), 2);
    assert_eq!(section_of(&store, 4), 3);
    assert_eq!(section_of(&store, 6), 3);
}

#[test]
fn run_aborts_wholly_on_validation_failure() {
    // Break one reference; the store must stay untouched
    let config = CONFIG.replace("available_jobs = [\"old_news\"]", "available_jobs = [\"old_news\", \"missing\"]");
    let project = Project::new(&config, STORE);
    let before = project.store_json();

    project
        .arkiv()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no job table for job: missing"));

    assert_eq!(project.store_json(), before);
}

#[test]
fn failed_job_turns_the_exit_code() {
    // `move` with no archive node in the store fails at execution time
    let config = CONFIG
        .replace("actions = [\"change_section\"]", "actions = [\"move\"]")
        .replace("section_mappings = { \"1\" = 2 }", "");
    let project = Project::new(&config, STORE);

    project
        .arkiv()
        .arg("run")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error occurred in processing job old_news",
        ))
        .stderr(predicate::str::contains("run finished with errors"));
}
