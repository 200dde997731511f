//! Per-page resolution context.
//!
//! A [`PageContext`] owns everything one page-composition pass needs: the
//! fragment registry, the resolver configuration and the render settings.
//! Build one per request and drop it once the response is produced; nothing
//! in it is shared with other contexts, so concurrent requests never see each
//! other's fragments.
//!
//! ```rust
//! use scriptseq::context::PageContext;
//! use scriptseq::fragment::Fragment;
//! use scriptseq::resolver::ResolutionPolicy;
//!
//! let mut page = PageContext::new(ResolutionPolicy::RequireDependencies);
//! page.register(Fragment::inline("app", "App.start();").with_dependency("jquery"));
//! page.register(Fragment::external("~/js/jquery.js").with_alias("jquery"));
//!
//! let html = page.render_scripts().unwrap();
//! assert!(html.find("jquery.js").unwrap() < html.find("App.start").unwrap());
//! ```

use crate::core::ScriptseqError;
use crate::fragment::Fragment;
use crate::registry::ScriptRegistry;
use crate::render::{RenderSettings, ScriptRenderer};
use crate::resolver::{DependencyResolver, Resolution, ResolutionPolicy};

/// Registry, resolver and renderer settings scoped to one page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    registry: ScriptRegistry,
    resolver: DependencyResolver,
    render: RenderSettings,
}

impl PageContext {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self {
            registry: ScriptRegistry::new(),
            resolver: DependencyResolver::new(policy),
            render: RenderSettings::default(),
        }
    }

    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.resolver = self.resolver.with_max_passes(max_passes);
        self
    }

    #[must_use]
    pub fn with_render_settings(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    /// Switch policy, keeping the pass cap.
    pub fn set_policy(&mut self, policy: ResolutionPolicy) {
        self.resolver = DependencyResolver::new(policy).with_max_passes(self.resolver.max_passes());
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.resolver.policy()
    }

    pub fn render_settings(&self) -> &RenderSettings {
        &self.render
    }

    pub fn render_settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.render
    }

    /// Register a fragment; see [`ScriptRegistry::register`].
    pub fn register(&mut self, fragment: Fragment) -> bool {
        self.registry.register(fragment)
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    /// Resolve a snapshot of the registered fragments.
    ///
    /// The registry itself is left untouched, so a failed resolution can be
    /// retried with another policy.
    pub fn resolve(&self) -> Result<Vec<Fragment>, ScriptseqError> {
        self.resolver.resolve(self.registry.get_all())
    }

    pub fn resolve_detailed(&self) -> Result<Resolution, ScriptseqError> {
        self.resolver.resolve_detailed(self.registry.get_all())
    }

    /// Resolve, then render the ordered fragments to markup.
    pub fn render_scripts(&self) -> Result<String, ScriptseqError> {
        let ordered = self.resolve()?;
        ScriptRenderer::new(self.render.clone())?.render(&ordered)
    }
}
