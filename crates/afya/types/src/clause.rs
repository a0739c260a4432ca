use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::status::Status;

/// Owner shown for clauses nobody has claimed yet.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// Maximum length of a generated short description before it is ellipsised.
pub const SHORT_DESCRIPTION_LIMIT: usize = 100;

/// Opaque, unique clause identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(pub uuid::Uuid);

impl ClauseId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ClauseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClauseId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ParseError::InvalidClauseId(s.to_string()))
    }
}

/// Slug naming a clause catalogue, e.g. `iso-7101`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Standard(String);

impl Standard {
    pub const ISO_7101: &'static str = "iso-7101";
    pub const ISO_27001: &'static str = "iso-27001";

    /// Normalises to a lowercase, trimmed slug.
    pub fn new(slug: impl AsRef<str>) -> Self {
        Self(slug.as_ref().trim().to_ascii_lowercase())
    }

    pub fn iso_7101() -> Self {
        Self::new(Self::ISO_7101)
    }

    pub fn iso_27001() -> Self {
        Self::new(Self::ISO_27001)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clause number of the form `<major>.<minor>`, ordered numerically.
///
/// Numbers that do not parse keep their raw text and order as `0.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClauseNumber {
    raw: String,
    major: u16,
    minor: u16,
}

impl ClauseNumber {
    /// Lenient constructor; never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let (major, minor) = split_number(&raw).unwrap_or((0, 0));
        Self { raw, major, minor }
    }

    /// Strict constructor; rejects anything that is not `<major>.<minor>`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        let (major, minor) =
            split_number(trimmed).ok_or_else(|| ParseError::InvalidClauseNumber(raw.to_string()))?;
        Ok(Self {
            raw: trimmed.to_string(),
            major,
            minor,
        })
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u16 {
        self.minor
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn split_number(raw: &str) -> Option<(u16, u16)> {
    let (major, minor) = raw.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

impl Ord for ClauseNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, &self.raw).cmp(&(other.major, other.minor, &other.raw))
    }
}

impl PartialOrd for ClauseNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<String> for ClauseNumber {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<ClauseNumber> for String {
    fn from(number: ClauseNumber) -> Self {
        number.raw
    }
}

impl fmt::Display for ClauseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Opaque reference to an artifact proving implementation (URI or file name).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceRecord(String);

impl EvidenceRecord {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }

    /// Last path segment, for display.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for EvidenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A compliance clause: the aggregate root of the status engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: ClauseId,
    pub standard: Standard,
    pub clause_number: ClauseNumber,
    #[serde(default)]
    pub short_description: String,
    /// Full requirement text.
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceRecord>,
    /// Stamped by persistence, never by the engine.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

fn default_owner() -> String {
    UNASSIGNED_OWNER.to_string()
}

impl Clause {
    /// A fresh clause: `NI`, unassigned, no evidence.
    pub fn new(
        standard: Standard,
        clause_number: ClauseNumber,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            id: ClauseId::new(),
            standard,
            clause_number,
            short_description: summarize(&description),
            description,
            status: Status::NotImplemented,
            owner: default_owner(),
            comments: None,
            evidence: Vec::new(),
            last_updated: None,
        }
    }

    pub fn with_short_description(mut self, short: impl Into<String>) -> Self {
        self.short_description = short.into();
        self
    }

    pub fn is_unassigned(&self) -> bool {
        self.owner == UNASSIGNED_OWNER
    }
}

/// First [`SHORT_DESCRIPTION_LIMIT`] characters, with `...` when truncated.
pub fn summarize(text: &str) -> String {
    if text.chars().count() > SHORT_DESCRIPTION_LIMIT {
        let mut short: String = text.chars().take(SHORT_DESCRIPTION_LIMIT).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

/// Sort clauses by numeric clause number in place.
pub fn sort_by_number(clauses: &mut [Clause]) {
    clauses.sort_by(|a, b| a.clause_number.cmp(&b.clause_number));
}
