//! Command-line interface for scriptseq.
//!
//! # Commands
//!
//! - `order` - Print the dependency-resolved script order
//! - `render` - Print ordered `<script>` markup
//! - `check` - Report unresolved dependencies, duplicates and cycles
//! - `tree` - Show the dependency tree of one script
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--manifest-path` - Manifest to load (also `SCRIPTSEQ_MANIFEST`)
//! - `--no-color` - Disable colored output
//!
//! Logs go to stderr so that `order` and `render` output can be piped.
//!
//! # Examples
//!
//! ```bash
//! scriptseq order --policy require-dependencies
//! scriptseq render --base-url https://cdn.example.com/app/ > scripts.html
//! scriptseq --manifest-path site/scriptseq.toml check
//! scriptseq tree app
//! ```

mod check;
mod common;
mod order;
mod render;
mod tree;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::MANIFEST_ENV_VAR;

pub use common::OutputFormat;

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter; `None` defers to `RUST_LOG`, then `warn`.
    pub log_level: Option<String>,
    /// Disable colored output.
    pub no_color: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the stderr log subscriber and apply color settings.
    ///
    /// Safe to call more than once; only the first subscriber is installed.
    pub fn apply(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Order and render page script fragments by their declared dependencies.
#[derive(Parser)]
#[command(name = "scriptseq", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the manifest (default: ./scriptseq.toml)
    #[arg(long, global = true, env = MANIFEST_ENV_VAR)]
    manifest_path: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dependency-resolved script order
    Order(order::OrderCommand),

    /// Print ordered <script> markup
    Render(render::RenderCommand),

    /// Check the manifest for dependency problems
    Check(check::CheckCommand),

    /// Show the dependency tree of one script
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Execute with configuration derived from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_color: self.no_color,
        }
    }

    /// Execute with an explicit configuration, e.g. from tests.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();

        let manifest_path = self.manifest_path.as_deref();
        match self.command {
            Commands::Order(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Render(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Check(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Tree(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
        }
    }
}
