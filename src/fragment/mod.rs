//! Script fragments: the unit the resolver orders.
//!
//! A [`Fragment`] is either an inline script (literal `content`) or an
//! external reference (`source`), identified by a primary name plus any
//! number of aliases. Other fragments declare dependencies against any of
//! those identifiers.
//!
//! # Referencable names
//!
//! [`Fragment::all_names`] returns the distinct union of the aliases, the name
//! and the source reference, in that order. The list is computed on first
//! access and cached for the lifetime of the value: changing `aliases`,
//! `name` or `source` afterwards does **not** update it. A fragment's
//! referencable identity is fixed at its first lookup, and the resolver
//! relies on that being stable across passes.
//!
//! ```rust
//! use scriptseq::fragment::Fragment;
//!
//! let mut jquery = Fragment::new("jquery").with_alias("jq");
//! assert_eq!(jquery.all_names(), ["jq", "jquery"]);
//!
//! jquery.aliases.push("$".to_string());
//! assert_eq!(jquery.all_names(), ["jq", "jquery"]);
//! ```

pub mod name_list;

pub use name_list::parse_name_list;

use serde::Serialize;
use std::cell::OnceCell;
use std::fmt;

/// A named, optionally aliased script fragment.
///
/// Fields are public so the surrounding page-composition code can adjust a
/// fragment after construction; see the module docs for how that interacts
/// with [`all_names`](Self::all_names).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Fragment {
    /// Primary identifier. May be empty when `source` is set, in which case
    /// the source reference acts as the name.
    pub name: String,
    /// Additional identifiers other fragments may depend on.
    pub aliases: Vec<String>,
    /// External resource locator. Mutually exclusive with `content` at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Names or aliases of fragments that must precede this one.
    pub dependencies: Vec<String>,
    /// Literal script body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Only render when another fragment depends on this one.
    ///
    /// Never consulted by the resolver. The renderer honours it only when
    /// pruning is enabled in its settings.
    pub dependency_only: bool,
    #[serde(skip)]
    all_names: OnceCell<Vec<String>>,
}

impl Fragment {
    /// Create a fragment with a primary name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an inline fragment carrying `content`.
    pub fn inline(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name).with_content(content)
    }

    /// Create an external fragment whose source reference doubles as its name.
    pub fn external(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            name: source.clone(),
            source: Some(source),
            ..Self::default()
        }
    }

    /// Add an alias, ignoring duplicates.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.add_alias(alias);
        self
    }

    /// Add several aliases, ignoring duplicates.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            self.add_alias(alias);
        }
        self
    }

    /// Declare a dependency, ignoring duplicates.
    #[must_use]
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.add_dependency(dependency);
        self
    }

    /// Declare several dependencies, ignoring duplicates.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dependency in dependencies {
            self.add_dependency(dependency);
        }
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_dependency_only(mut self, dependency_only: bool) -> Self {
        self.dependency_only = dependency_only;
        self
    }

    /// Insert into the alias set. Returns `false` if it was already present.
    pub fn add_alias(&mut self, alias: impl Into<String>) -> bool {
        push_unique(&mut self.aliases, alias.into())
    }

    /// Insert into the dependency set. Returns `false` if it was already present.
    pub fn add_dependency(&mut self, dependency: impl Into<String>) -> bool {
        push_unique(&mut self.dependencies, dependency.into())
    }

    /// The identifier used for registration and reporting.
    ///
    /// This is `name`, or the source reference when `name` is empty.
    pub fn effective_name(&self) -> &str {
        if self.name.is_empty() {
            self.source.as_deref().unwrap_or_default()
        } else {
            &self.name
        }
    }

    /// Every identifier this fragment can be referenced by.
    ///
    /// Aliases first, then the name, then the source reference, duplicates
    /// removed keeping the first occurrence. Frozen after the first call.
    pub fn all_names(&self) -> &[String] {
        self.all_names.get_or_init(|| {
            let mut names = Vec::with_capacity(self.aliases.len() + 2);
            for alias in &self.aliases {
                push_unique(&mut names, alias.clone());
            }
            if !self.name.is_empty() {
                push_unique(&mut names, self.name.clone());
            }
            if let Some(source) = &self.source {
                push_unique(&mut names, source.clone());
            }
            names
        })
    }

    /// Whether `token` is one of this fragment's referencable names.
    pub fn exposes(&self, token: &str) -> bool {
        self.all_names().iter().any(|name| name == token)
    }

    /// Whether this fragment declares a dependency on any of `other`'s names.
    pub fn depends_on(&self, other: &Fragment) -> bool {
        self.dependencies.iter().any(|dependency| other.exposes(dependency))
    }

    /// Whether the fragment has neither inline content nor a source reference.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.source.is_none()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.effective_name())
    }
}

fn push_unique(set: &mut Vec<String>, value: String) -> bool {
    if set.contains(&value) {
        false
    } else {
        set.push(value);
        true
    }
}
