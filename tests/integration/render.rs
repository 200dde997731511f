use predicates::prelude::*;
use scriptseq::test_utils::{ManifestFixture, TestEnvironment};

use super::{project, scriptseq};

#[test]
fn test_render_basic() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env).arg("render").assert().success().stdout(
        "<script type=\"text/javascript\" src=\"/js/jquery.js\"></script>\n\
         <script type=\"text/javascript\">\nApp.start();\n</script>\n",
    );
}

#[test]
fn test_render_base_url_flag() {
    let env = project(ManifestFixture::basic());

    scriptseq(&env)
        .args(["render", "--base-url", "https://cdn.example.com/app/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src=\"https://cdn.example.com/app/js/jquery.js\""));
}

#[test]
fn test_render_settings_from_manifest() {
    let env = TestEnvironment::new().unwrap();
    env.create_file(
        "scriptseq.toml",
        r#"
[settings]
base_url = "https://static.example.com"
prune_dependency_only = true
external_template = "<script defer src=\"{{ src }}\"></script>"

[[scripts]]
name = "helpers"
src = "~/js/helpers.js"
dependency_only = true

[[scripts]]
name = "polyfill"
src = "~/js/polyfill.js"
dependency_only = true

[[scripts]]
name = "page"
dependencies = "helpers"
content = "page();"
"#,
    )
    .unwrap();

    scriptseq(&env)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<script defer src=\"https://static.example.com/js/helpers.js\"></script>",
        ))
        .stdout(predicate::str::contains("page();"))
        .stdout(predicate::str::contains("polyfill").not());
}

#[test]
fn test_render_empty_manifest_prints_nothing() {
    let env = project(ManifestFixture::empty());

    scriptseq(&env).arg("render").assert().success().stdout("");
}

#[test]
fn test_render_invalid_template() {
    let env = TestEnvironment::new().unwrap();
    env.create_file(
        "scriptseq.toml",
        "[settings]\ninline_template = \"{{ content\"\n\n[[scripts]]\nname = \"a\"\ncontent = \"a();\"\n",
    )
    .unwrap();

    scriptseq(&env)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'inline' failed"));
}
