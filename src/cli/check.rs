//! Diagnose a manifest without rendering anything.
//!
//! Reports duplicate script names, dependencies that no script exposes,
//! dependency cycles, and whether a `require-dependencies` resolution
//! succeeds and settles within the pass cap. Exits with status 1 when any
//! problem is found.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use super::common::{OutputFormat, known_names, load_context};
use crate::context::PageContext;
use crate::core::closest_name;
use crate::resolver::{FragmentGraph, ResolutionPolicy, ordering_violations};

/// Command to check a manifest for dependency problems.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Default, Serialize)]
struct CheckReport {
    scripts: usize,
    duplicates: Vec<String>,
    unresolved: Vec<UnresolvedDependency>,
    cycle: Option<Vec<String>>,
    /// Error from a `require-dependencies` run, if it failed
    resolution_error: Option<String>,
    converged: bool,
    violations: Vec<String>,
}

#[derive(Debug, Serialize)]
struct UnresolvedDependency {
    script: String,
    dependency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl CheckReport {
    fn problem_count(&self) -> usize {
        self.duplicates.len()
            + self.unresolved.len()
            + usize::from(self.cycle.is_some())
            + usize::from(self.resolution_error.is_some())
            + usize::from(self.resolution_error.is_none() && !self.converged)
            + self.violations.len()
    }
}

impl CheckCommand {
    pub async fn execute_with_manifest_path(self, manifest_path: Option<&Path>) -> Result<()> {
        let (path, context) = load_context(manifest_path).await?;
        let report = build_report(&context);

        match self.format {
            OutputFormat::Text => print_text(&report, &path),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        let problems = report.problem_count();
        if problems > 0 {
            bail!("{problems} problem(s) found in {}", path.display());
        }
        Ok(())
    }
}

fn build_report(context: &PageContext) -> CheckReport {
    let fragments = context.registry().get_all();
    let names = known_names(&fragments);
    let graph = FragmentGraph::build(&fragments);

    let unresolved = graph
        .unresolved()
        .iter()
        .map(|(script, dependency)| UnresolvedDependency {
            script: script.clone(),
            dependency: dependency.clone(),
            suggestion: closest_name(dependency, names.iter().copied()).map(str::to_string),
        })
        .collect();

    let mut strict = context.clone();
    strict.set_policy(ResolutionPolicy::RequireDependencies);
    let (resolution_error, converged, violations) = match strict.resolve_detailed() {
        Ok(resolution) => (
            None,
            resolution.converged,
            ordering_violations(&resolution.fragments).iter().map(ToString::to_string).collect(),
        ),
        Err(e) => (Some(e.to_string()), false, Vec::new()),
    };

    CheckReport {
        scripts: fragments.len(),
        duplicates: context.registry().dropped_duplicates().to_vec(),
        unresolved,
        cycle: graph.detect_cycle(),
        resolution_error,
        converged,
        violations,
    }
}

fn print_text(report: &CheckReport, path: &Path) {
    println!("Checking {} ({} scripts)", path.display(), report.scripts);

    let mut clean = true;
    let mut problem = |message: String| {
        clean = false;
        println!("  {} {message}", "✗".red());
    };

    for name in &report.duplicates {
        problem(format!("duplicate script '{name}' (later definition ignored)"));
    }
    for entry in &report.unresolved {
        let hint = entry
            .suggestion
            .as_ref()
            .map(|s| format!(" (did you mean '{s}'?)"))
            .unwrap_or_default();
        problem(format!("'{}' depends on unknown '{}'{hint}", entry.script, entry.dependency));
    }
    if let Some(cycle) = &report.cycle {
        problem(format!("dependency cycle: {}", cycle.join(" -> ")));
    }
    if let Some(error) = &report.resolution_error {
        problem(format!("require-dependencies resolution failed: {error}"));
    } else if !report.converged {
        problem("resolution did not settle within the pass limit".to_string());
    }
    for violation in &report.violations {
        problem(violation.clone());
    }

    if clean {
        println!("  {} no problems found", "✓".green());
    }
}
