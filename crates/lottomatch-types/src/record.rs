//! Published results and player entries.
//!
//! A [`ResultRecord`] is what a publisher hands over; once stored it becomes
//! a [`ContestResult`] stamped with `saved_at`. An [`Entry`] is a player's
//! chosen numbers for one draw and is never mutated by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ContestId, DrawDate, DrawKey, EntryId};

/// A single lottery number.
pub type LotteryNumber = u32;

/// Winning numbers for one draw, as supplied to the result store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub contest: ContestId,
    pub draw_date: DrawDate,
    pub winning_numbers: Vec<LotteryNumber>,
}

impl ResultRecord {
    #[must_use]
    pub fn new(
        contest: impl Into<ContestId>,
        draw_date: impl Into<DrawDate>,
        winning_numbers: Vec<LotteryNumber>,
    ) -> Self {
        Self {
            contest: contest.into(),
            draw_date: draw_date.into(),
            winning_numbers,
        }
    }

    #[must_use]
    pub fn key(&self) -> DrawKey {
        DrawKey {
            contest: self.contest.clone(),
            draw_date: self.draw_date.clone(),
        }
    }
}

/// A stored result: the record plus the time it entered the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResult {
    pub contest: ContestId,
    pub draw_date: DrawDate,
    pub winning_numbers: Vec<LotteryNumber>,
    pub saved_at: DateTime<Utc>,
}

impl ContestResult {
    /// Stamp a record with the given save time.
    #[must_use]
    pub fn from_record(record: ResultRecord, saved_at: DateTime<Utc>) -> Self {
        Self {
            contest: record.contest,
            draw_date: record.draw_date,
            winning_numbers: record.winning_numbers,
            saved_at,
        }
    }

    #[must_use]
    pub fn key(&self) -> DrawKey {
        DrawKey {
            contest: self.contest.clone(),
            draw_date: self.draw_date.clone(),
        }
    }
}

/// A player's entry for one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Generated when absent from the input.
    #[serde(default)]
    pub id: EntryId,
    pub contest: ContestId,
    pub draw_date: DrawDate,
    pub chosen_numbers: Vec<LotteryNumber>,
}

impl Entry {
    #[must_use]
    pub fn new(
        contest: impl Into<ContestId>,
        draw_date: impl Into<DrawDate>,
        chosen_numbers: Vec<LotteryNumber>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            contest: contest.into(),
            draw_date: draw_date.into(),
            chosen_numbers,
        }
    }

    #[must_use]
    pub fn key(&self) -> DrawKey {
        DrawKey {
            contest: self.contest.clone(),
            draw_date: self.draw_date.clone(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry[{}] {}@{} {:?}",
            self.id, self.contest, self.draw_date, self.chosen_numbers
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ResultRecord {
    /// Contest `"6000"`, drawn `2024-01-06`, numbers `1..=5`.
    pub fn dummy() -> Self {
        Self::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5])
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Entry {
    /// Entry for the [`ResultRecord::dummy`] draw.
    pub fn dummy(chosen_numbers: Vec<LotteryNumber>) -> Self {
        Self::new("6000", "2024-01-06", chosen_numbers)
    }

    /// Entry with `count` distinct numbers drawn from `1..=max`.
    pub fn random(
        contest: impl Into<ContestId>,
        draw_date: impl Into<DrawDate>,
        count: usize,
        max: LotteryNumber,
    ) -> Self {
        use rand::seq::index::sample;

        let mut rng = rand::thread_rng();
        let numbers = sample(&mut rng, max as usize, count)
            .into_iter()
            .map(|i| LotteryNumber::try_from(i + 1).unwrap_or(max))
            .collect();
        Self::new(contest, draw_date, numbers)
    }
}
