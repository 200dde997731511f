use predicates::prelude::*;
use scriptseq::test_utils::ManifestFixture;

use super::{project, scriptseq};

#[test]
fn test_check_clean_manifest() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 scripts)"))
        .stdout(predicate::str::contains("no problems found"));
}

#[test]
fn test_check_reports_cycle() {
    let env = project(ManifestFixture::cycle());

    scriptseq(&env)
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("dependency cycle: A -> B -> A"))
        .stderr(predicate::str::contains("problem(s) found"));
}

#[test]
fn test_check_reports_duplicates() {
    let env = project(ManifestFixture::duplicate());

    scriptseq(&env)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate script 'lib'"));
}

#[test]
fn test_check_reports_unresolved_with_suggestion() {
    let env = project(ManifestFixture::missing_dependency());

    scriptseq(&env)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "'X' depends on unknown 'jqeury' (did you mean 'jquery'?)",
        ))
        .stdout(predicate::str::contains("require-dependencies resolution failed"));
}

#[test]
fn test_check_json() {
    let env = project(ManifestFixture::missing_dependency());

    let output = scriptseq(&env).args(["check", "--format", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scripts"], 3);
    assert_eq!(report["unresolved"][0]["script"], "X");
    assert_eq!(report["unresolved"][0]["suggestion"], "jquery");
    assert!(report["cycle"].is_null());
}
