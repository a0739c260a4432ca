//! Transition Validator.
//!
//! Decides whether a move between two statuses is a legal single step,
//! independently of evidence. There is no override: a no-op is invalid and
//! skipping a level is invalid in either direction.

use afya_types::{are_adjacent, Status};

use crate::error::TransitionError;
use crate::evidence::requires_evidence;

/// True iff `next` differs from `current` and is exactly one level away.
pub fn is_valid_transition(current: Status, next: Status) -> bool {
    next != current && are_adjacent(current, next)
}

/// True iff `next` sits strictly higher in the lattice than `current`.
pub fn is_upgrade(current: Status, next: Status) -> bool {
    next.index() > current.index()
}

/// Full rule check for moving `current` to `next`: no-op, single step, then
/// the evidence gate on upgrades into MI/O.
pub fn check_transition(
    current: Status,
    next: Status,
    has_evidence: bool,
) -> Result<(), TransitionError> {
    if next == current {
        return Err(TransitionError::NoOpTransition(current));
    }
    if !is_valid_transition(current, next) {
        return Err(TransitionError::IllegalStep {
            from: current,
            to: next,
        });
    }
    if is_upgrade(current, next) && requires_evidence(next) && !has_evidence {
        return Err(TransitionError::EvidenceRequired(next));
    }
    Ok(())
}

/// Statuses a picker should offer as selectable from `current`, in lattice order.
///
/// One step either way; gated upgrades are dropped when the clause has no evidence.
pub fn allowed_targets(current: Status, has_evidence: bool) -> Vec<Status> {
    Status::ALL
        .iter()
        .copied()
        .filter(|next| check_transition(current, *next, has_evidence).is_ok())
        .collect()
}
