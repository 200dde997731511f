//! Satisfied-set pass shared by the `require-dependencies` and
//! `skip-problems` policies.

use std::collections::HashSet;

use super::SkippedFragment;
use crate::core::ScriptseqError;
use crate::fragment::Fragment;

/// What to do with a dependency that no fragment exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OnMissing {
    /// Abort the resolution with [`ScriptseqError::MissingDependency`].
    Fail,
    /// Drop the dependent fragment and keep going.
    Skip,
}

/// Run one pass. Returns `true` if any fragment was moved or dropped.
///
/// `satisfied` starts empty each pass and gains a fragment's names once all
/// of that fragment's dependencies have been looked at. Providers found
/// after the dependent are pulled in front of it; providers already in front
/// need nothing.
pub(super) fn satisfy_pass(
    order: &mut Vec<Fragment>,
    on_missing: OnMissing,
    skipped: &mut Vec<SkippedFragment>,
) -> Result<bool, ScriptseqError> {
    let mut changed = false;
    let mut satisfied: HashSet<String> = HashSet::new();
    let mut i = 0;

    'scan: while i < order.len() {
        let dependencies = order[i].dependencies.clone();

        for dependency in &dependencies {
            if satisfied.contains(dependency) {
                continue;
            }

            if let Some(k) = find_provider(&order[i + 1..], dependency).map(|offset| i + 1 + offset)
            {
                let provider = order.remove(k);
                tracing::debug!(
                    "Moving '{}' before '{}' (provides '{}')",
                    provider.effective_name(),
                    order[i].effective_name(),
                    dependency
                );
                order.insert(i, provider);
                i += 1;
                changed = true;
                continue;
            }

            // Already in front (or a self-reference): nothing to move.
            if find_provider(&order[..=i], dependency).is_some() {
                continue;
            }

            let script = order[i].effective_name().to_string();
            match on_missing {
                OnMissing::Fail => {
                    return Err(ScriptseqError::MissingDependency {
                        script,
                        dependency: dependency.clone(),
                    });
                }
                OnMissing::Skip => {
                    tracing::warn!(
                        "Skipping script '{}': dependency '{}' is not registered",
                        script,
                        dependency
                    );
                    order.remove(i);
                    skipped.push(SkippedFragment {
                        script,
                        missing: dependency.clone(),
                    });
                    changed = true;
                    continue 'scan;
                }
            }
        }

        satisfied.extend(order[i].all_names().iter().cloned());
        i += 1;
    }

    Ok(changed)
}

/// Index of the first fragment in `candidates` exposing `name`.
fn find_provider(candidates: &[Fragment], name: &str) -> Option<usize> {
    candidates.iter().position(|fragment| fragment.exposes(name))
}
