//! The `scriptseq.toml` manifest.
//!
//! ```toml
//! [settings]
//! policy = "require-dependencies"
//! base_url = "https://cdn.example.com/app/"
//!
//! [[scripts]]
//! name = "jquery"
//! src = "~/js/jquery.js"
//! aliases = "jq, jQuery"
//!
//! [[scripts]]
//! name = "app"
//! dependencies = ["jq"]
//! content = "App.start();"
//! ```
//!
//! `aliases` and `dependencies` take either a delimited string or an array;
//! both forms go through [`parse_name_list`], so array entries may
//! themselves hold several names.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parser::{parse_config, parse_config_str};
use crate::constants::{DEFAULT_MANIFEST_FILE, MANIFEST_ENV_VAR, MAX_RESOLUTION_PASSES};
use crate::context::PageContext;
use crate::core::ScriptseqError;
use crate::fragment::{Fragment, parse_name_list};
use crate::render::RenderSettings;
use crate::resolver::ResolutionPolicy;

/// A parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub settings: Settings,
    pub scripts: Vec<ScriptEntry>,
}

/// The `[settings]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: ResolutionPolicy,
    pub max_passes: usize,
    #[serde(flatten)]
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: ResolutionPolicy::default(),
            max_passes: MAX_RESOLUTION_PASSES,
            render: RenderSettings::default(),
        }
    }
}

/// One `[[scripts]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptEntry {
    pub name: Option<String>,
    pub src: Option<String>,
    pub aliases: Option<NameListSpec>,
    pub dependencies: Option<NameListSpec>,
    pub content: Option<String>,
    pub dependency_only: bool,
}

/// A name list written as a delimited string or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameListSpec {
    Delimited(String),
    List(Vec<String>),
}

impl NameListSpec {
    /// Tokenize into individual names.
    pub fn names(&self) -> Result<Vec<String>, ScriptseqError> {
        match self {
            Self::Delimited(raw) => parse_name_list(raw),
            Self::List(items) => {
                let mut names = Vec::new();
                for item in items {
                    names.extend(parse_name_list(item)?);
                }
                Ok(names)
            }
        }
    }
}

impl ScriptEntry {
    /// Label for error messages: the name, the source, or the 1-based position.
    fn label(&self, index: usize) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.src.as_deref())
            .map_or_else(|| format!("scripts[{}]", index + 1), str::to_string)
    }

    /// Build the fragment this entry describes.
    ///
    /// `index` is the entry's position in the manifest, used to label
    /// entries that have neither a name nor a source.
    pub fn to_fragment(&self, index: usize) -> Result<Fragment, ScriptseqError> {
        let name = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
        let src = self.src.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let mut fragment = match (name, src) {
            (Some(name), Some(src)) => Fragment::new(name).with_source(src),
            (Some(name), None) => Fragment::new(name),
            (None, Some(src)) => Fragment::external(src),
            (None, None) => {
                return Err(ScriptseqError::InvalidFragment {
                    name: self.label(index),
                    reason: "a script needs a 'name' or a 'src'".to_string(),
                });
            }
        };

        if let Some(aliases) = &self.aliases {
            fragment = fragment.with_aliases(aliases.names()?);
        }
        if let Some(dependencies) = &self.dependencies {
            fragment = fragment.with_dependencies(dependencies.names()?);
        }
        if let Some(content) = &self.content {
            fragment = fragment.with_content(content.clone());
        }

        Ok(fragment.with_dependency_only(self.dependency_only))
    }
}

impl Manifest {
    /// Load and parse a manifest file.
    pub async fn load(path: &Path) -> Result<Self> {
        let manifest: Self = parse_config(path).await?;
        tracing::debug!(
            "Loaded manifest {} with {} script(s)",
            path.display(),
            manifest.scripts.len()
        );
        Ok(manifest)
    }

    /// Parse manifest text; `origin` names the source in errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ScriptseqError> {
        parse_config_str(content, origin)
    }

    /// Build every entry's fragment, in file order.
    pub fn fragments(&self) -> Result<Vec<Fragment>, ScriptseqError> {
        self.scripts.iter().enumerate().map(|(index, entry)| entry.to_fragment(index)).collect()
    }

    /// Validate the entries and register them in a fresh [`PageContext`]
    /// configured from `[settings]`.
    pub fn into_context(self) -> Result<PageContext, ScriptseqError> {
        if self.settings.max_passes == 0 {
            return Err(ScriptseqError::ConfigError {
                message: "settings.max_passes must be at least 1".to_string(),
            });
        }
        let fragments = self.fragments()?;
        let Settings {
            policy,
            max_passes,
            render,
        } = self.settings;

        let mut context =
            PageContext::new(policy).with_max_passes(max_passes).with_render_settings(render);
        for fragment in fragments {
            context.register(fragment);
        }
        Ok(context)
    }
}

/// Pick the manifest path: explicit flag, then `SCRIPTSEQ_MANIFEST`, then
/// `scriptseq.toml` in the working directory.
pub fn find_manifest(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var_os(MANIFEST_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_MANIFEST_FILE),
    }
}
