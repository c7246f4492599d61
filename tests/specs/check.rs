//! `arkiv check` specs

use crate::prelude::{Project, CONFIG, STORE};
use predicates::prelude::*;

#[test]
fn valid_configuration_passes() {
    let project = Project::new(CONFIG, STORE);
    project
        .arkiv()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK (1 job(s))"));
}

#[test]
fn validation_failure_names_the_job_and_field() {
    let config = CONFIG.replace("\"1\" = \"tree\"", "\"1\" = \"subtree\"");
    let project = Project::new(&config, STORE);
    project
        .arkiv()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid fetch mode 'subtree' for node 1 for job: old_news",
        ))
        .stderr(predicate::str::contains("configuration validation failed"));
}

#[test]
fn missing_references_fail_validation() {
    let config = CONFIG.replace("{ \"1\" = 2 }", "{ \"1\" = 9 }");
    let project = Project::new(&config, STORE);
    project
        .arkiv()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent section 9"));
}

#[test]
fn check_does_not_mutate_the_store() {
    let project = Project::new(CONFIG, STORE);
    let before = project.store_json();
    project.arkiv().arg("check").assert().success();
    assert_eq!(project.store_json(), before);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let project = Project::new(CONFIG, STORE);
    std::fs::remove_file(project.config_path()).unwrap();
    project
        .arkiv()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading configuration"));
}
