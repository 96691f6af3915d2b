//! Winner and report types produced by the aggregator.
//!
//! A [`Winner`] is ephemeral: it is recomputed on every aggregation call and
//! never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DrawKey, Entry, PrizeTier, ValidationResult};

/// An entry tied at its group's winning level, with its pool share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    #[serde(flatten)]
    pub entry: Entry,
    pub validation: ValidationResult,
    /// Share of the prize pool: `pool / tie_count`. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub prize: Decimal,
    /// Highest match count in this entry's draw group.
    pub winning_level: u32,
}

impl Winner {
    /// Match count of this winner (always equal to `winning_level`).
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.validation.match_count().unwrap_or(0)
    }

    #[must_use]
    pub fn key(&self) -> DrawKey {
        self.entry.key()
    }

    #[must_use]
    pub fn prize_tier(&self) -> PrizeTier {
        self.validation
            .prize_tier
            .unwrap_or_else(|| PrizeTier::from_match_count(self.matches()))
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Winner[{}] {}@{} matches={} prize={}",
            self.entry.id,
            self.entry.contest,
            self.entry.draw_date,
            self.matches(),
            self.prize,
        )
    }
}

/// Winners bucketed by exact match count.
///
/// `total_winners` counts every winner, including those whose match count
/// has no bucket (a group whose best result was a single match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersReport {
    pub grand_prize: Vec<Winner>,
    pub second_prize: Vec<Winner>,
    pub third_prize: Vec<Winner>,
    pub consolation: Vec<Winner>,
    pub total_winners: usize,
}

impl WinnersReport {
    /// Number of winners that landed in a named bucket.
    #[must_use]
    pub fn bucketed(&self) -> usize {
        self.grand_prize.len()
            + self.second_prize.len()
            + self.third_prize.len()
            + self.consolation.len()
    }

    /// Winners counted in `total_winners` but absent from every bucket.
    #[must_use]
    pub fn unbucketed(&self) -> usize {
        self.total_winners.saturating_sub(self.bucketed())
    }
}
