//! Markup rendering for resolved fragments.
//!
//! The renderer consumes the resolver's output and wraps each fragment in a
//! `<script>` tag: inline fragments get their content as the tag body,
//! external fragments get a `src` attribute after URL templating (see
//! [`url::expand_url`]). Fragments with neither content nor a source produce
//! no output.
//!
//! Tag shapes are Tera templates with these variables:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `name` | effective name |
//! | `content` | inline body (inline template only) |
//! | `src` | expanded URL (external template only) |
//! | `aliases`, `dependencies` | arrays of strings |
//!
//! Autoescaping is off so script bodies pass through verbatim; the default
//! external template runs `src` through the `attr` filter, which escapes the
//! characters that could break out of a double-quoted attribute.
//!
//! # Dependency-only fragments
//!
//! With [`RenderSettings::prune_dependency_only`] enabled, a fragment flagged
//! `dependency_only` is emitted only if some rendered fragment depends on it,
//! directly or transitively. The setting is off by default, which leaves the
//! flag without effect.

pub mod url;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tera::{Context as TeraContext, Tera, Value};

use crate::constants::DEFAULT_URL_PLACEHOLDER;
use crate::core::ScriptseqError;
use crate::fragment::Fragment;
use crate::resolver::FragmentGraph;

/// Default tag for inline fragments.
pub const DEFAULT_INLINE_TEMPLATE: &str =
    "<script type=\"text/javascript\">\n{{ content }}\n</script>";

/// Default tag for external fragments.
pub const DEFAULT_EXTERNAL_TEMPLATE: &str =
    "<script type=\"text/javascript\" src=\"{{ src | attr }}\"></script>";

const INLINE: &str = "inline";
const EXTERNAL: &str = "external";

/// Rendering knobs, usually read from the manifest's `[settings]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Base URL that replaces the placeholder in source references.
    pub base_url: Option<String>,
    /// Prefix marking a source as application-root relative.
    pub url_placeholder: String,
    /// Emit dependency-only fragments only when something depends on them.
    pub prune_dependency_only: bool,
    /// Override for [`DEFAULT_INLINE_TEMPLATE`].
    pub inline_template: Option<String>,
    /// Override for [`DEFAULT_EXTERNAL_TEMPLATE`].
    pub external_template: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            url_placeholder: DEFAULT_URL_PLACEHOLDER.to_string(),
            prune_dependency_only: false,
            inline_template: None,
            external_template: None,
        }
    }
}

/// Renders ordered fragments to `<script>` markup.
pub struct ScriptRenderer {
    tera: Tera,
    settings: RenderSettings,
}

impl ScriptRenderer {
    /// Compile the tag templates.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptseqError::TemplateError`] if a custom template does not parse.
    pub fn new(settings: RenderSettings) -> Result<Self, ScriptseqError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("attr", attr_filter);

        let inline = settings.inline_template.as_deref().unwrap_or(DEFAULT_INLINE_TEMPLATE);
        let external = settings.external_template.as_deref().unwrap_or(DEFAULT_EXTERNAL_TEMPLATE);

        tera.add_raw_template(INLINE, inline).map_err(|e| template_error(INLINE, &e))?;
        tera.add_raw_template(EXTERNAL, external).map_err(|e| template_error(EXTERNAL, &e))?;

        Ok(Self {
            tera,
            settings,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render every fragment in order, one tag per line.
    pub fn render(&self, fragments: &[Fragment]) -> Result<String, ScriptseqError> {
        let keep = self.pruned_names(fragments);
        let mut tags = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            if let Some(keep) = &keep
                && fragment.dependency_only
                && !keep.contains(fragment.effective_name())
            {
                tracing::debug!(
                    "Not rendering dependency-only script '{}': nothing depends on it",
                    fragment.effective_name()
                );
                continue;
            }

            if let Some(tag) = self.render_fragment(fragment)? {
                tags.push(tag);
            }
        }

        Ok(tags.join("\n"))
    }

    /// Render one fragment, or `None` if it has nothing to emit.
    ///
    /// Inline content takes precedence when a fragment carries both.
    pub fn render_fragment(&self, fragment: &Fragment) -> Result<Option<String>, ScriptseqError> {
        let mut context = TeraContext::new();
        context.insert("name", fragment.effective_name());
        context.insert("aliases", &fragment.aliases);
        context.insert("dependencies", &fragment.dependencies);

        let template = if let Some(content) = &fragment.content {
            context.insert("content", content);
            INLINE
        } else if let Some(source) = &fragment.source {
            let src = url::expand_url(
                source,
                &self.settings.url_placeholder,
                self.settings.base_url.as_deref(),
            );
            context.insert("src", &src);
            EXTERNAL
        } else {
            return Ok(None);
        };

        self.tera.render(template, &context).map(Some).map_err(|e| template_error(template, &e))
    }

    /// Names allowed through when pruning is on; `None` when it is off.
    fn pruned_names(&self, fragments: &[Fragment]) -> Option<HashSet<String>> {
        if !self.settings.prune_dependency_only {
            return None;
        }

        let graph = FragmentGraph::build(fragments);
        let mut keep = HashSet::new();
        for fragment in fragments.iter().filter(|f| !f.dependency_only) {
            keep.insert(fragment.effective_name().to_string());
            keep.extend(graph.transitive_dependencies(fragment.effective_name()));
        }
        Some(keep)
    }
}

/// Escape `&`, `"`, `<` and `>` for use inside a double-quoted attribute.
fn attr_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = tera::try_get_value!("attr", "value", String, value);
    let escaped = raw
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    Ok(Value::String(escaped))
}

fn template_error(template: &str, error: &tera::Error) -> ScriptseqError {
    // tera keeps the useful part in the source chain
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }

    ScriptseqError::TemplateError {
        template: template.to_string(),
        reason,
    }
}
