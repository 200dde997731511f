use predicates::prelude::*;
use scriptseq::test_utils::{ManifestFixture, TestEnvironment};

use super::{project, scriptseq};

#[test]
fn test_missing_manifest() {
    let env = TestEnvironment::new().unwrap();

    scriptseq(&env)
        .arg("order")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Manifest file not found"))
        .stderr(predicate::str::contains("SCRIPTSEQ_MANIFEST"));
}

#[test]
fn test_invalid_toml() {
    let env = project(ManifestFixture::invalid_syntax());

    scriptseq(&env)
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest file syntax"));
}

#[test]
fn test_invalid_name_list() {
    let env = project(ManifestFixture::invalid_name_list());

    scriptseq(&env)
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name list"));
}

#[test]
fn test_entry_without_name_or_src() {
    let env = TestEnvironment::new().unwrap();
    env.create_file("scriptseq.toml", "[[scripts]]\ncontent = \"x();\"\n").unwrap();

    scriptseq(&env)
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script 'scripts[1]'"));
}

#[test]
fn test_manifest_path_flag() {
    let env = TestEnvironment::new().unwrap();
    let path = env.create_file("site/scripts.toml", &ManifestFixture::reversed_chain().content).unwrap();

    scriptseq(&env)
        .arg("--manifest-path")
        .arg(&path)
        .args(["order", "--policy", "require-dependencies"])
        .assert()
        .success()
        .stdout("C\nB\nA\n");
}

#[test]
fn test_manifest_env_var() {
    let env = TestEnvironment::new().unwrap();
    let path = env.create_file("site/scripts.toml", &ManifestFixture::basic().content).unwrap();

    scriptseq(&env)
        .env("SCRIPTSEQ_MANIFEST", &path)
        .arg("order")
        .assert()
        .success()
        .stdout("jquery\napp\n");
}
