//! Winner determination.
//!
//! ```text
//! winners(entries) -> Vec<Winner>
//! ```
//!
//! ## Algorithm
//!
//! 1. Partition entries by `(contest, draw_date)` in first-appearance order,
//!    validating each entry as it is placed
//! 2. Per group, the winning level is the best match count among its
//!    validated entries; a level of 0, or below the configured minimum,
//!    produces no winners
//! 3. Every validated entry at the winning level is a tied winner
//! 4. The prize pool is split evenly among the tied winners
//! 5. All winners are stable-sorted by contest ascending, then match count
//!    descending; anything beyond those two keys keeps group order

use std::collections::HashMap;

use lottomatch_types::{ContestId, DrawKey, Entry, ValidationResult, ValidatorConfig, Winner};
use rust_decimal::Decimal;

use crate::{ResultStore, validator::validate_entry};

/// An entry paired with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub entry: Entry,
    pub validation: ValidationResult,
}

impl ValidatedEntry {
    /// Match count if validated, `None` otherwise.
    #[must_use]
    pub fn match_count(&self) -> Option<u32> {
        self.validation.match_count()
    }
}

/// All entries for a single draw.
#[derive(Debug, Clone)]
pub struct DrawGroup {
    pub key: DrawKey,
    pub entries: Vec<ValidatedEntry>,
}

/// Highest match count among validated entries; 0 if none validated.
#[must_use]
pub fn get_winning_level(entries: &[ValidatedEntry]) -> u32 {
    entries
        .iter()
        .filter_map(ValidatedEntry::match_count)
        .max()
        .unwrap_or(0)
}

/// Pari-mutuel share of `pool` for each of `tie_count` winners.
///
/// Returns zero when there are no winners to share among.
#[must_use]
pub fn split_prize(pool: Decimal, tie_count: usize) -> Decimal {
    if tie_count == 0 {
        return Decimal::ZERO;
    }
    pool.checked_div(Decimal::from(tie_count))
        .unwrap_or(Decimal::ZERO)
}

/// Order winners by contest ascending, then match count descending.
pub fn sort_winners(winners: &mut [Winner]) {
    winners.sort_by(|a, b| {
        a.entry
            .contest
            .cmp(&b.entry.contest)
            .then_with(|| b.matches().cmp(&a.matches()))
    });
}

/// Groups, validates and ranks entries against a fixed result table.
pub struct WinnerAggregator<'a> {
    store: &'a ResultStore,
    config: &'a ValidatorConfig,
}

impl<'a> WinnerAggregator<'a> {
    #[must_use]
    pub fn new(store: &'a ResultStore, config: &'a ValidatorConfig) -> Self {
        Self { store, config }
    }

    /// Partition entries by draw, validating each one.
    pub fn group<'e>(&self, entries: impl IntoIterator<Item = &'e Entry>) -> Vec<DrawGroup> {
        let mut groups: Vec<DrawGroup> = Vec::new();
        let mut index: HashMap<DrawKey, usize> = HashMap::new();

        for entry in entries {
            let validated = ValidatedEntry {
                entry: entry.clone(),
                validation: validate_entry(self.store, entry),
            };
            let key = entry.key();
            match index.get(&key) {
                Some(&i) => groups[i].entries.push(validated),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(DrawGroup {
                        key,
                        entries: vec![validated],
                    });
                }
            }
        }

        groups
    }

    /// Tied winners of one group, each carrying its share of the pool.
    #[must_use]
    pub fn group_winners(&self, group: DrawGroup) -> Vec<Winner> {
        let winning_level = get_winning_level(&group.entries);
        if winning_level == 0 || winning_level < self.config.min_winning_level {
            tracing::debug!(
                key = %group.key,
                entries = group.entries.len(),
                winning_level,
                "Group produces no winners"
            );
            return Vec::new();
        }

        let tied: Vec<ValidatedEntry> = group
            .entries
            .into_iter()
            .filter(|e| e.match_count() == Some(winning_level))
            .collect();
        let prize = split_prize(self.config.prize_pool, tied.len());

        tracing::debug!(
            key = %group.key,
            winning_level,
            ties = tied.len(),
            prize = %prize,
            "Prize pool split"
        );

        tied.into_iter()
            .map(|e| Winner {
                entry: e.entry,
                validation: e.validation,
                prize,
                winning_level,
            })
            .collect()
    }

    /// Winners across every draw present in `entries`, sorted.
    pub fn winners<'e>(&self, entries: impl IntoIterator<Item = &'e Entry>) -> Vec<Winner> {
        let groups = self.group(entries);
        let group_count = groups.len();

        let mut winners: Vec<Winner> = groups
            .into_iter()
            .flat_map(|group| self.group_winners(group))
            .collect();
        sort_winners(&mut winners);

        tracing::info!(
            groups = group_count,
            winners = winners.len(),
            "Winner determination complete"
        );

        winners
    }

    /// Winners among the entries for `contest` only. Other contests are
    /// ignored.
    pub fn winners_by_contest(&self, entries: &[Entry], contest: &ContestId) -> Vec<Winner> {
        self.winners(entries.iter().filter(|e| e.contest == *contest))
    }
}
