//! Insertion-ordered fragment registry.
//!
//! During page composition, fragments are registered as they are
//! encountered. The first registration of a name wins; later fragments with
//! the same name are dropped with a diagnostic. The resolver consumes the
//! registry's [`get_all`](ScriptRegistry::get_all) snapshot, in registration
//! order.
//!
//! A registry belongs to exactly one page/request lifecycle. Concurrent
//! requests each build their own (see [`PageContext`](crate::context::PageContext)).

use indexmap::IndexMap;

use crate::fragment::Fragment;

/// Ordered, string-keyed store of fragments for one resolution lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    fragments: IndexMap<String, Fragment>,
    dropped: Vec<String>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fragment under its effective name.
    ///
    /// Returns `true` if the fragment was stored, `false` if a fragment with
    /// the same name was already registered (the new one is discarded).
    pub fn register(&mut self, fragment: Fragment) -> bool {
        let key = fragment.effective_name().to_string();
        if self.fragments.contains_key(&key) {
            tracing::debug!("Script '{}' already registered, ignoring duplicate", key);
            self.dropped.push(key);
            return false;
        }

        tracing::trace!("Registered script '{}'", key);
        self.fragments.insert(key, fragment);
        true
    }

    /// Look up a fragment by its registered name.
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Names whose second (or later) registration was dropped, in the order
    /// the duplicates arrived.
    pub fn dropped_duplicates(&self) -> &[String] {
        &self.dropped
    }

    /// Snapshot of every registered fragment, in registration order.
    pub fn get_all(&self) -> Vec<Fragment> {
        self.fragments.values().cloned().collect()
    }

    /// Consume the registry, yielding its fragments in registration order.
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments.into_values().collect()
    }
}
