//! Dependency resolution for script fragments.
//!
//! The resolver takes a fragment sequence (normally the registry's
//! registration-order snapshot) and reorders it so that every fragment comes
//! after the fragments it depends on. Dependencies name any of a fragment's
//! [`all_names`](crate::fragment::Fragment::all_names), so an alias resolves
//! exactly like a primary name.
//!
//! # Policies
//!
//! | Policy | Algorithm | Missing dependency |
//! |---|---|---|
//! | [`Basic`](ResolutionPolicy::Basic) | forward-scan repair | ignored |
//! | [`RequireDependencies`](ResolutionPolicy::RequireDependencies) | satisfied-set pull-forward | error |
//! | [`SkipProblems`](ResolutionPolicy::SkipProblems) | satisfied-set pull-forward | dependent dropped |
//!
//! ## Basic
//!
//! Each pass walks the sequence from the second element. For the fragment at
//! position `i`, the first earlier fragment that depends on it is moved to
//! directly after it. Only violations that can be seen from the provider's
//! position are repaired, so a dependency on a name nobody exposes simply
//! never produces a constraint.
//!
//! ## RequireDependencies / SkipProblems
//!
//! Each pass keeps a set of names already placed. For each fragment, every
//! dependency not yet satisfied is searched for *after* the fragment; the
//! first provider found is pulled to directly before it. A dependency that no
//! fragment exposes either fails the whole resolution or drops the dependent,
//! depending on the policy.
//!
//! # Convergence
//!
//! Passes repeat until one makes no change, up to [`MAX_RESOLUTION_PASSES`].
//! There is no cycle detection in the algorithm itself: a circular
//! dependency keeps reordering until the cap and the last order is returned.
//! Hitting the cap is logged (with the cycle path when one exists) but is not
//! an error under any policy.
//!
//! # Examples
//!
//! ```rust
//! use scriptseq::fragment::Fragment;
//! use scriptseq::resolver::{ResolutionPolicy, resolve};
//!
//! let fragments = vec![
//!     Fragment::new("A").with_dependency("B"),
//!     Fragment::new("B").with_dependency("C"),
//!     Fragment::new("C"),
//! ];
//!
//! let ordered = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap();
//! let names: Vec<&str> = ordered.iter().map(|f| f.effective_name()).collect();
//! assert_eq!(names, ["C", "B", "A"]);
//! ```

mod basic;
pub mod dependency_graph;
mod satisfy;

pub use dependency_graph::{FragmentGraph, OrderingViolation, ordering_violations};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_RESOLUTION_PASSES;
use crate::core::ScriptseqError;
use crate::fragment::Fragment;

/// How the resolver treats misordered and unresolvable dependencies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Forward-scan repair; never fails.
    #[default]
    Basic,
    /// Every dependency must be exposed by some fragment, otherwise fail.
    RequireDependencies,
    /// Drop fragments whose dependencies cannot be found.
    SkipProblems,
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::RequireDependencies => "require-dependencies",
            Self::SkipProblems => "skip-problems",
        };
        f.write_str(name)
    }
}

/// A fragment dropped under [`ResolutionPolicy::SkipProblems`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFragment {
    /// Name of the dropped fragment
    pub script: String,
    /// The dependency token that could not be found
    pub missing: String,
}

/// Outcome of a resolution run, with bookkeeping about how it got there.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The ordered fragments
    pub fragments: Vec<Fragment>,
    /// Number of passes performed
    pub passes: usize,
    /// Whether the last pass made no change (false when the pass cap cut it off)
    pub converged: bool,
    /// Fragments dropped under `SkipProblems`, in the order they were dropped
    pub skipped: Vec<SkippedFragment>,
}

impl Resolution {
    /// Effective names of the ordered fragments.
    pub fn names(&self) -> Vec<&str> {
        self.fragments.iter().map(Fragment::effective_name).collect()
    }
}

/// Orders fragment sequences under one [`ResolutionPolicy`].
///
/// A resolver holds no state between calls; each [`resolve`](Self::resolve)
/// works on the sequence it is given and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver {
    policy: ResolutionPolicy,
    max_passes: usize,
}

impl DependencyResolver {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self {
            policy,
            max_passes: MAX_RESOLUTION_PASSES,
        }
    }

    /// Override the pass cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Order `fragments` so dependencies precede dependents.
    ///
    /// # Errors
    ///
    /// Under [`ResolutionPolicy::RequireDependencies`], returns
    /// [`ScriptseqError::MissingDependency`] for the first dependency that no
    /// fragment in the sequence exposes. Other policies never fail.
    pub fn resolve(&self, fragments: Vec<Fragment>) -> Result<Vec<Fragment>, ScriptseqError> {
        self.resolve_detailed(fragments).map(|resolution| resolution.fragments)
    }

    /// Like [`resolve`](Self::resolve), but also reports pass count,
    /// convergence and skipped fragments.
    pub fn resolve_detailed(
        &self,
        mut fragments: Vec<Fragment>,
    ) -> Result<Resolution, ScriptseqError> {
        tracing::debug!(
            "Resolving {} scripts with policy '{}' (max {} passes)",
            fragments.len(),
            self.policy,
            self.max_passes
        );

        let mut skipped = Vec::new();
        let mut passes = 0;
        let mut converged = false;

        while passes < self.max_passes {
            passes += 1;
            let changed = match self.policy {
                ResolutionPolicy::Basic => basic::repair_pass(&mut fragments),
                ResolutionPolicy::RequireDependencies => {
                    satisfy::satisfy_pass(&mut fragments, satisfy::OnMissing::Fail, &mut skipped)?
                }
                ResolutionPolicy::SkipProblems => {
                    satisfy::satisfy_pass(&mut fragments, satisfy::OnMissing::Skip, &mut skipped)?
                }
            };

            if !changed {
                converged = true;
                break;
            }
        }

        if converged {
            tracing::debug!("Resolution converged after {} pass(es)", passes);
        } else {
            self.report_non_convergence(&fragments);
        }

        Ok(Resolution {
            fragments,
            passes,
            converged,
            skipped,
        })
    }

    fn report_non_convergence(&self, fragments: &[Fragment]) {
        match FragmentGraph::build(fragments).detect_cycle() {
            Some(cycle) => tracing::warn!(
                "Script order did not settle within {} passes; circular dependency: {}",
                self.max_passes,
                cycle.join(" → ")
            ),
            None => tracing::warn!(
                "Script order did not settle within {} passes; returning best-effort order",
                self.max_passes
            ),
        }
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new(ResolutionPolicy::default())
    }
}

/// Resolve `fragments` with the default pass cap.
///
/// Shorthand for `DependencyResolver::new(policy).resolve(fragments)`.
pub fn resolve(
    fragments: Vec<Fragment>,
    policy: ResolutionPolicy,
) -> Result<Vec<Fragment>, ScriptseqError> {
    DependencyResolver::new(policy).resolve(fragments)
}

#[cfg(test)]
mod tests;
