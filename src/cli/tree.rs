//! Display the dependency tree of one script.
//!
//! ```text
//! └── app
//!     ├── widgets
//!     │   └── jquery
//!     └── util
//! ```
//!
//! Dependencies link to the first registered script exposing the name, the
//! same provider the resolver would pull forward. Cycles are cut with a
//! `(circular reference)` marker.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::common::{known_names, load_context};
use crate::core::{ErrorContext, IntoAnyhowWithContext, ScriptseqError, closest_name};
use crate::resolver::FragmentGraph;

/// Command to print the dependency tree rooted at one script.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Name, alias or source of the root script
    name: String,
}

impl TreeCommand {
    pub async fn execute_with_manifest_path(self, manifest_path: Option<&Path>) -> Result<()> {
        let (_, context) = load_context(manifest_path).await?;
        let fragments = context.registry().get_all();

        let Some(root) = fragments.iter().find(|f| f.exposes(&self.name)) else {
            let error = ScriptseqError::Other {
                message: format!("No script named '{}'", self.name),
            };
            let mut error_context = ErrorContext::new(error.clone());
            if let Some(candidate) = closest_name(&self.name, known_names(&fragments)) {
                error_context = error_context.with_suggestion(format!("Did you mean '{candidate}'?"));
            }
            return Err(error.into_anyhow_with_context(error_context));
        };

        let graph = FragmentGraph::build(&fragments);
        print!("{}", graph.to_tree_string(root.effective_name()));
        Ok(())
    }
}
