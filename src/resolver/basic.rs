//! Forward-scan repair used by [`ResolutionPolicy::Basic`](super::ResolutionPolicy::Basic).

use crate::fragment::Fragment;

/// Run one repair pass. Returns `true` if any fragment was moved.
///
/// For each position `i >= 1`, the first fragment in `[0, i)` that depends on
/// `order[i]` is removed and reinserted directly after it. One violation is
/// repaired per position; whatever is left is picked up by the next pass.
pub(super) fn repair_pass(order: &mut Vec<Fragment>) -> bool {
    let mut changed = false;

    for i in 1..order.len() {
        let current = &order[i];
        let Some(j) = order[..i].iter().position(|candidate| candidate.depends_on(current)) else {
            continue;
        };

        // `current` shifts down to i - 1 once the dependent is taken out.
        let dependent = order.remove(j);
        tracing::debug!(
            "Moving '{}' after '{}'",
            dependent.effective_name(),
            order[i - 1].effective_name()
        );
        order.insert(i, dependent);
        changed = true;
    }

    changed
}
