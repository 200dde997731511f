//! Helpers shared by the subcommands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

use crate::config::{Manifest, find_manifest};
use crate::context::PageContext;
use crate::core::{ErrorContext, IntoAnyhowWithContext, ScriptseqError, closest_name};
use crate::fragment::Fragment;

/// Output format for commands that can print JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Locate, load and validate the manifest.
pub async fn load_context(manifest_path: Option<&Path>) -> Result<(PathBuf, PageContext)> {
    let path = find_manifest(manifest_path);
    let manifest = Manifest::load(&path).await?;
    let context = manifest
        .into_context()
        .with_context(|| format!("Invalid manifest: {}", path.display()))?;

    tracing::debug!("Registered {} script(s) from {}", context.registry().len(), path.display());
    Ok((path, context))
}

/// Every name any registered fragment answers to.
pub fn known_names(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter().flat_map(|f| f.all_names().iter().map(String::as_str)).collect()
}

/// Attach a "did you mean" hint to missing-dependency errors.
pub fn explain(error: ScriptseqError, fragments: &[Fragment]) -> anyhow::Error {
    let ScriptseqError::MissingDependency {
        dependency,
        ..
    } = &error
    else {
        return error.into();
    };

    let Some(candidate) = closest_name(dependency, known_names(fragments)) else {
        return error.into();
    };
    let context = ErrorContext::new(error.clone()).with_suggestion(format!(
        "Did you mean '{candidate}'? Or resolve with --policy skip-problems to drop scripts with unmet dependencies"
    ));
    error.into_anyhow_with_context(context)
}
