//! Print `<script>` markup for the resolved scripts.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::common::{explain, load_context};
use crate::resolver::ResolutionPolicy;

/// Command to render the manifest's scripts as ordered `<script>` tags.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Resolution policy (overrides the manifest's `settings.policy`)
    #[arg(short, long, value_enum)]
    policy: Option<ResolutionPolicy>,

    /// Base URL substituted for the `~/` placeholder in script sources
    #[arg(long)]
    base_url: Option<String>,
}

impl RenderCommand {
    pub async fn execute_with_manifest_path(self, manifest_path: Option<&Path>) -> Result<()> {
        let (_, mut context) = load_context(manifest_path).await?;
        if let Some(policy) = self.policy {
            context.set_policy(policy);
        }
        if let Some(base_url) = self.base_url {
            context.render_settings_mut().base_url = Some(base_url);
        }

        let markup = context.render_scripts().map_err(|e| explain(e, &context.registry().get_all()))?;
        if !markup.is_empty() {
            println!("{markup}");
        }
        Ok(())
    }
}
