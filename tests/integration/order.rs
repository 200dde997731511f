use predicates::prelude::*;
use scriptseq::test_utils::ManifestFixture;

use super::{project, scriptseq};

#[test]
fn test_order_pulls_aliased_dependency_forward() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env).arg("order").assert().success().stdout("jquery\napp\n");
}

#[test]
fn test_order_reversed_chain_with_policy_flag() {
    let env = project(ManifestFixture::reversed_chain());

    scriptseq(&env)
        .args(["order", "--policy", "require-dependencies"])
        .assert()
        .success()
        .stdout("C\nB\nA\n");
}

#[test]
fn test_order_skip_problems_drops_dependents() {
    let env = project(ManifestFixture::missing_dependency());

    scriptseq(&env)
        .args(["order", "--policy", "skip-problems"])
        .assert()
        .success()
        .stdout("jquery\n")
        .stderr(predicate::str::contains("X"));
}

#[test]
fn test_order_basic_ignores_missing_dependency() {
    let env = project(ManifestFixture::missing_dependency());

    let output = scriptseq(&env).args(["order", "--policy", "basic"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 3);
    let x = names.iter().position(|n| *n == "X").unwrap();
    let y = names.iter().position(|n| *n == "Y").unwrap();
    assert!(x < y, "X must precede Y: {names:?}");
}

#[test]
fn test_order_require_dependencies_fails_with_suggestion() {
    let env = project(ManifestFixture::missing_dependency());

    scriptseq(&env)
        .args(["order", "--policy", "require-dependencies"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("depends on 'jqeury'"))
        .stderr(predicate::str::contains("Did you mean 'jquery'?"));
}

#[test]
fn test_order_json() {
    let env = project(ManifestFixture::missing_dependency());

    let output = scriptseq(&env)
        .args(["order", "--policy", "skip-problems", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["policy"], "skip-problems");
    assert_eq!(report["converged"], true);
    assert_eq!(report["order"], serde_json::json!(["jquery"]));
    assert_eq!(report["skipped"][0]["script"], "X");
    assert_eq!(report["skipped"][0]["missing"], "jqeury");
    assert_eq!(report["skipped"][1]["script"], "Y");
}

#[test]
fn test_order_cycle_warns_and_succeeds() {
    let env = project(ManifestFixture::cycle());

    scriptseq(&env)
        .arg("order")
        .assert()
        .success()
        .stderr(predicate::str::contains("did not settle within 15 passes"))
        .stderr(predicate::str::contains("circular dependency"));
}

#[test]
fn test_order_quiet_suppresses_warnings() {
    let env = project(ManifestFixture::cycle());

    scriptseq(&env).args(["--quiet", "order"]).assert().success().stderr("");
}

#[test]
fn test_order_policy_from_manifest() {
    // basic fixture sets require-dependencies; overriding to skip-problems still orders
    let env = project(ManifestFixture::basic());

    scriptseq(&env)
        .args(["order", "--policy", "skip-problems"])
        .assert()
        .success()
        .stdout("jquery\napp\n");
}
