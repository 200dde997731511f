//! scriptseq - dependency-aware ordering of page script fragments
//!
//! Pages are assembled from many independently declared script fragments:
//! inline snippets and references to external script files. Each fragment has
//! a name, optional aliases, and a list of names it depends on. scriptseq
//! collects the fragments registered for one page and emits them in an order
//! where every fragment appears after the fragments it depends on.
//!
//! # Architecture Overview
//!
//! ```text
//! scriptseq.toml ──► config::Manifest ──► context::PageContext
//!                                           ├─ registry::ScriptRegistry   (first registration wins)
//!                                           ├─ resolver::DependencyResolver (pass-bounded reordering)
//!                                           └─ render::ScriptRenderer     (<script> markup)
//! ```
//!
//! # Core Modules
//!
//! - [`fragment`] - The fragment model and name-list parsing
//! - [`registry`] - Insertion-ordered, duplicate-rejecting fragment registry
//! - [`resolver`] - Ordering policies and dependency-graph diagnostics
//! - [`context`] - Per-page registry, resolver and render settings
//! - [`render`] - Markup generation and URL templating
//!
//! ## Supporting Modules
//!
//! - [`config`] - `scriptseq.toml` manifest loading
//! - [`core`] - Error types and user-facing error reporting
//! - [`cli`] - The `scriptseq` command line
//! - [`constants`] - Shared limits and defaults
//!
//! # Example
//!
//! ```rust
//! use scriptseq::fragment::Fragment;
//! use scriptseq::resolver::{ResolutionPolicy, resolve};
//!
//! let fragments = vec![
//!     Fragment::inline("app", "App.start();").with_dependency("jq"),
//!     Fragment::external("~/js/jquery.js").with_alias("jq"),
//! ];
//!
//! let ordered = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap();
//! assert_eq!(ordered[0].effective_name(), "~/js/jquery.js");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod fragment;
pub mod registry;
pub mod render;
pub mod resolver;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
