//! End-to-end tests for the `scriptseq` binary.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **order**: resolved order under each policy, text and JSON output
//! - **render**: markup generation and base URL handling
//! - **check**: manifest diagnostics and exit status
//! - **tree**: dependency tree display
//! - **errors**: manifest lookup and input validation failures

use assert_cmd::Command;
use scriptseq::test_utils::{ManifestFixture, TestEnvironment};

mod check;
mod errors;
mod order;
mod render;
mod tree;

/// A `scriptseq` invocation running inside `env`, isolated from the caller's
/// environment variables.
fn scriptseq(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("scriptseq").unwrap();
    cmd.current_dir(env.project_path())
        .env_remove("SCRIPTSEQ_MANIFEST")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn project(fixture: ManifestFixture) -> TestEnvironment {
    TestEnvironment::with_manifest(&fixture).unwrap()
}
