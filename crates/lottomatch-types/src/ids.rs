//! Identifiers used throughout Lottomatch.
//!
//! Contest and draw-date identifiers are opaque strings compared exactly.
//! The pair of them forms a [`DrawKey`], the composite key every result
//! and every group of entries is addressed by. Entry identifiers use UUIDv7.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ContestId
// ---------------------------------------------------------------------------

/// Identifier of a lottery game or series.
///
/// Ordering is plain lexicographic string ordering, which is the order
/// winner lists are sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(pub String);

impl ContestId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// DrawDate
// ---------------------------------------------------------------------------

/// Date of a single draw within a contest, kept as the string it arrived as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawDate(pub String);

impl DrawDate {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as an ISO `YYYY-MM-DD` date. Matching never depends on this.
    #[must_use]
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl From<&str> for DrawDate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for DrawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// DrawKey
// ---------------------------------------------------------------------------

/// Composite `(contest, draw_date)` key.
///
/// Two keys are equal only when both components are equal, regardless of
/// what characters either component contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawKey {
    pub contest: ContestId,
    pub draw_date: DrawDate,
}

impl DrawKey {
    #[must_use]
    pub fn new(contest: impl Into<ContestId>, draw_date: impl Into<DrawDate>) -> Self {
        Self {
            contest: contest.into(),
            draw_date: draw_date.into(),
        }
    }
}

impl fmt::Display for DrawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.contest, self.draw_date)
    }
}

// ---------------------------------------------------------------------------
// EntryId
// ---------------------------------------------------------------------------

/// Unique identifier for a player entry. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_key_components_do_not_collide() {
        // Concatenating with "_" would make these two keys identical.
        let a = DrawKey::new("A_B", "C");
        let b = DrawKey::new("A", "B_C");
        assert_ne!(a, b);
    }

    #[test]
    fn contest_ordering_is_lexicographic() {
        assert!(ContestId::from("10") < ContestId::from("9"));
        assert!(ContestId::from("A") < ContestId::from("B"));
    }

    #[test]
    fn draw_date_iso_parse() {
        let d = DrawDate::from("2024-03-15");
        assert_eq!(d.as_naive_date(), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(DrawDate::from("15/03/2024").as_naive_date().is_none());
    }

    #[test]
    fn entry_id_uniqueness() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn draw_key_display() {
        let key = DrawKey::new("quina", "2024-01-01");
        assert_eq!(format!("{key}"), "quina@2024-01-01");
    }

    #[test]
    fn transparent_serde() {
        let json = serde_json::to_string(&ContestId::from("6000")).unwrap();
        assert_eq!(json, "\"6000\"");
        let key: DrawKey =
            serde_json::from_str(r#"{"contest":"6000","drawDate":"2024-01-01"}"#).unwrap();
        assert_eq!(key, DrawKey::new("6000", "2024-01-01"));
    }
}
