//! Print the resolved script order.
//!
//! # Examples
//!
//! ```bash
//! scriptseq order
//! scriptseq order --policy require-dependencies --format json
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use super::common::{OutputFormat, explain, load_context};
use crate::resolver::{Resolution, ResolutionPolicy, SkippedFragment};

/// Command to print the dependency-resolved order of the manifest's scripts.
#[derive(Args, Debug)]
pub struct OrderCommand {
    /// Resolution policy (overrides the manifest's `settings.policy`)
    #[arg(short, long, value_enum)]
    policy: Option<ResolutionPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct OrderReport<'a> {
    policy: ResolutionPolicy,
    passes: usize,
    converged: bool,
    order: Vec<&'a str>,
    skipped: &'a [SkippedFragment],
}

impl OrderCommand {
    pub async fn execute_with_manifest_path(self, manifest_path: Option<&Path>) -> Result<()> {
        let (_, mut context) = load_context(manifest_path).await?;
        if let Some(policy) = self.policy {
            context.set_policy(policy);
        }

        let resolution = context
            .resolve_detailed()
            .map_err(|e| explain(e, &context.registry().get_all()))?;

        match self.format {
            OutputFormat::Text => print_text(&resolution),
            OutputFormat::Json => {
                let report = OrderReport {
                    policy: context.policy(),
                    passes: resolution.passes,
                    converged: resolution.converged,
                    order: resolution.names(),
                    skipped: &resolution.skipped,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }
}

fn print_text(resolution: &Resolution) {
    for name in resolution.names() {
        println!("{name}");
    }
    for skipped in &resolution.skipped {
        tracing::info!("Skipped '{}' (missing '{}')", skipped.script, skipped.missing);
    }
}
