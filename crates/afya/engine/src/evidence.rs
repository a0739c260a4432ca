//! Evidence Gate.
//!
//! Only the existence of evidence is inspected, never its content. The gated
//! levels are fixed policy: `MI` and `O`.

use afya_types::{Clause, Status};

/// Levels an upgrade may only enter when the clause already has evidence.
pub const GATED_LEVELS: [Status; 2] = [Status::MostlyImplemented, Status::Optimized];

/// True iff the clause has at least one evidence record.
pub fn has_evidence(clause: &Clause) -> bool {
    !clause.evidence.is_empty()
}

/// True iff entering `next` by upgrade requires evidence.
pub fn requires_evidence(next: Status) -> bool {
    GATED_LEVELS.contains(&next)
}

/// Clauses sitting in a gated level with no evidence attached.
///
/// This happens when evidence is removed after the upgrade. Reported only;
/// statuses are left alone.
pub fn evidence_shortfall(clauses: &[Clause]) -> Vec<&Clause> {
    clauses
        .iter()
        .filter(|c| requires_evidence(c.status) && !has_evidence(c))
        .collect()
}
