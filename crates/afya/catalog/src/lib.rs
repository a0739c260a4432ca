#![deny(unsafe_code)]
//! # afya-catalog
//!
//! Standard clause sets as data. Each catalogue is a list of
//! `(clause number, requirement text)` entries; seeding turns it into fresh
//! [`Clause`] records at `NI`, unassigned and without evidence.

pub mod iso27001;
pub mod iso7101;

use afya_types::{Clause, ClauseNumber, Standard};
use serde::Serialize;

/// One requirement of a standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub number: &'static str,
    pub text: &'static str,
}

impl CatalogueEntry {
    pub const fn new(number: &'static str, text: &'static str) -> Self {
        Self { number, text }
    }

    /// A fresh clause for this entry under `standard`.
    pub fn to_clause(&self, standard: &Standard) -> Clause {
        Clause::new(standard.clone(), ClauseNumber::new(self.number), self.text)
    }
}

/// Errors from catalogue lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no clause catalogue for standard: {0}")]
    UnknownStandard(Standard),
}

/// Standards with a built-in catalogue.
pub fn known_standards() -> Vec<Standard> {
    vec![Standard::iso_7101(), Standard::iso_27001()]
}

/// Catalogue entries for `standard`, if one is built in.
pub fn entries(standard: &Standard) -> Option<&'static [CatalogueEntry]> {
    match standard.as_str() {
        Standard::ISO_7101 => Some(iso7101::CLAUSES),
        Standard::ISO_27001 => Some(iso27001::CLAUSES),
        _ => None,
    }
}

/// Fresh clauses for every entry of `standard`, in catalogue order.
pub fn seed(standard: &Standard) -> Result<Vec<Clause>, CatalogError> {
    let entries =
        entries(standard).ok_or_else(|| CatalogError::UnknownStandard(standard.clone()))?;
    Ok(entries.iter().map(|e| e.to_clause(standard)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use afya_types::{Status, SHORT_DESCRIPTION_LIMIT};
    use std::collections::HashSet;

    #[test]
    fn iso_7101_has_34_subclauses() {
        assert_eq!(iso7101::CLAUSES.len(), 34);
    }

    #[test]
    fn iso_27001_covers_clauses_4_to_10() {
        let clauses = seed(&Standard::iso_27001()).unwrap();
        assert_eq!(clauses.len(), 23);
        let majors: HashSet<u16> = clauses.iter().map(|c| c.clause_number.major()).collect();
        assert_eq!(majors, (4..=10).collect::<HashSet<u16>>());
    }

    #[test]
    fn seeded_clauses_start_fresh() {
        for standard in known_standards() {
            for clause in seed(&standard).unwrap() {
                assert_eq!(clause.status, Status::NotImplemented);
                assert!(clause.is_unassigned());
                assert!(clause.evidence.is_empty());
                assert_eq!(clause.standard, standard);
                assert!(clause.short_description.chars().count() <= SHORT_DESCRIPTION_LIMIT + 3);
            }
        }
    }

    #[test]
    fn numbers_parse_and_are_unique() {
        for standard in known_standards() {
            let entries = entries(&standard).unwrap();
            let mut seen = HashSet::new();
            for entry in entries {
                assert!(ClauseNumber::parse(entry.number).is_ok(), "{}", entry.number);
                assert!(seen.insert(entry.number), "duplicate {}", entry.number);
            }
        }
    }

    #[test]
    fn catalogue_order_is_numeric() {
        let clauses = seed(&Standard::iso_7101()).unwrap();
        assert!(clauses
            .windows(2)
            .all(|w| w[0].clause_number < w[1].clause_number));
    }

    #[test]
    fn unknown_standard_rejected() {
        let err = seed(&Standard::new("iso-9001")).unwrap_err();
        assert!(format!("{}", err).contains("iso-9001"));
    }
}
