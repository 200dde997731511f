//! Canned manifests for tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MANIFEST_FILE;

/// Test fixture for creating sample scriptseq.toml files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.trim().to_string(),
        }
    }

    /// An app depending on jQuery through an alias, listed dependent-first
    pub fn basic() -> Self {
        Self::new(
            "basic",
            r#"
[settings]
policy = "require-dependencies"

[[scripts]]
name = "app"
dependencies = "jq"
content = "App.start();"

[[scripts]]
name = "jquery"
aliases = "jq, jQuery"
src = "~/js/jquery.js"
"#,
        )
    }

    /// `A -> B -> C`, registered in reverse dependency order
    pub fn reversed_chain() -> Self {
        Self::new(
            "reversed_chain",
            r#"
[[scripts]]
name = "A"
dependencies = "B"
content = "a();"

[[scripts]]
name = "B"
dependencies = "C"
content = "b();"

[[scripts]]
name = "C"
content = "c();"
"#,
        )
    }

    /// `Y` depends on `X`, which depends on a script nobody registers
    pub fn missing_dependency() -> Self {
        Self::new(
            "missing_dependency",
            r#"
[[scripts]]
name = "Y"
dependencies = "X"
content = "y();"

[[scripts]]
name = "X"
dependencies = "jqeury"
content = "x();"

[[scripts]]
name = "jquery"
src = "~/js/jquery.js"
"#,
        )
    }

    /// Two scripts depending on each other
    pub fn cycle() -> Self {
        Self::new(
            "cycle",
            r#"
[[scripts]]
name = "A"
dependencies = "B"
content = "a();"

[[scripts]]
name = "B"
dependencies = "A"
content = "b();"
"#,
        )
    }

    /// The same name registered twice
    pub fn duplicate() -> Self {
        Self::new(
            "duplicate",
            r#"
[[scripts]]
name = "lib"
content = "first();"

[[scripts]]
name = "lib"
content = "second();"
"#,
        )
    }

    /// A dependency list containing a quote
    pub fn invalid_name_list() -> Self {
        Self::new(
            "invalid_name_list",
            r#"
[[scripts]]
name = "app"
dependencies = "jquery, 'util'"
"#,
        )
    }

    /// Manifest with invalid syntax
    pub fn invalid_syntax() -> Self {
        Self::new(
            "invalid_syntax",
            r#"
[[scripts]
name = "app"
"#,
        )
    }

    /// Empty manifest (only comments)
    pub fn empty() -> Self {
        Self::new("empty", "# no scripts yet")
    }

    /// Write the manifest to a directory
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(DEFAULT_MANIFEST_FILE);
        fs::write(&manifest_path, &self.content)?;
        Ok(manifest_path)
    }
}
