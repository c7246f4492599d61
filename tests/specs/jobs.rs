//! `arkiv jobs` specs

use crate::prelude::{Project, CONFIG, STORE};
use predicates::prelude::*;

#[test]
fn jobs_prints_the_validated_definitions() {
    let project = Project::new(CONFIG, STORE);
    project
        .arkiv()
        .arg("jobs")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Job settings for old_news:"))
        .stdout(predicate::str::contains("node 1 (tree), filter: more_than 0"))
        .stdout(predicate::str::contains("action change_section: {1 -> 2}"));
}

#[test]
fn jobs_rejects_an_invalid_configuration() {
    let config = CONFIG.replace("more_than:0", "most_than:0");
    let project = Project::new(&config, STORE);
    project
        .arkiv()
        .arg("jobs")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid filter '[1]=most_than:0' for job: old_news",
        ));
}
