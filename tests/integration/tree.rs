use predicates::prelude::*;
use scriptseq::test_utils::ManifestFixture;

use super::{project, scriptseq};

#[test]
fn test_tree_follows_aliases() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env).args(["tree", "app"]).assert().success().stdout("└── app\n    └── jquery\n");
}

#[test]
fn test_tree_root_by_alias() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env).args(["tree", "jQuery"]).assert().success().stdout("└── jquery\n");
}

#[test]
fn test_tree_chain() {
    let env = project(ManifestFixture::reversed_chain());

    scriptseq(&env)
        .args(["tree", "A"])
        .assert()
        .success()
        .stdout("└── A\n    └── B\n        └── C\n");
}

#[test]
fn test_tree_marks_cycle() {
    let env = project(ManifestFixture::cycle());

    scriptseq(&env)
        .args(["tree", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(circular reference)"));
}

#[test]
fn test_tree_unknown_script_suggests() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env)
        .args(["tree", "ap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No script named 'ap'"))
        .stderr(predicate::str::contains("Did you mean 'app'?"));
}
