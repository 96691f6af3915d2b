//! The validation service.
//!
//! [`LotteryValidator`] owns the result table behind a [`RwLock`]: lookups,
//! validation and aggregation take the read side and may run concurrently,
//! while [`LotteryValidator::set_results`] takes the write side, so no
//! reader ever sees a partially rebuilt table. Each aggregation call holds a
//! single read guard for its whole duration.
//!
//! The table is only ever replaced wholesale, so a poisoned lock still
//! guards a consistent table and is recovered rather than propagated.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use lottomatch_types::{
    ContestId, ContestResult, DrawDate, Entry, LotteryNumber, MatchResult, PrizeTier, Result,
    ResultRecord, ValidationResult, ValidatorConfig, Winner, WinnersReport,
};

use crate::{
    ResultStore, WinnerAggregator,
    aggregator::{self, ValidatedEntry},
    classifier::get_prize_tier,
    matcher::match_numbers,
    report::build_report,
};

/// Validate one entry against a result table.
///
/// An entry whose draw has no stored result is `validated: false`; that is
/// an expected outcome, not an error.
#[must_use]
pub fn validate_entry(store: &ResultStore, entry: &Entry) -> ValidationResult {
    let Some(result) = store.get_contest_result(&entry.contest, &entry.draw_date) else {
        return ValidationResult::no_result();
    };

    let matched = match_numbers(&entry.chosen_numbers, &result.winning_numbers);
    let tier = get_prize_tier(matched.count);
    ValidationResult::matched(matched, tier, result.winning_numbers.clone())
}

/// Validation service holding the current result table.
#[derive(Debug, Default)]
pub struct LotteryValidator {
    store: RwLock<ResultStore>,
    config: ValidatorConfig,
}

impl LotteryValidator {
    /// Create a validator with the default config and an empty table.
    ///
    /// The default `min_winning_level` is 2, so a draw whose best entry hits
    /// a single number has no winners. Use [`Self::with_config`] with
    /// `min_winning_level: 1` to let such draws produce winners; they count
    /// in `total_winners` but fall into no report bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom config.
    ///
    /// # Errors
    /// Returns the config's validation error if it is unusable.
    pub fn with_config(config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: RwLock::new(ResultStore::new()),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, ResultStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the result table.
    pub fn set_results(&self, records: impl IntoIterator<Item = ResultRecord>) {
        let mut fresh = ResultStore::new();
        fresh.set_results(records);
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        *store = fresh;
    }

    #[must_use]
    pub fn get_contest_result(
        &self,
        contest: &ContestId,
        draw_date: &DrawDate,
    ) -> Option<ContestResult> {
        self.read().get_contest_result(contest, draw_date).cloned()
    }

    #[must_use]
    pub fn get_all_results(&self) -> Vec<ContestResult> {
        self.read().get_all_results()
    }

    #[must_use]
    pub fn match_numbers(
        &self,
        chosen: &[LotteryNumber],
        winning: &[LotteryNumber],
    ) -> MatchResult {
        match_numbers(chosen, winning)
    }

    #[must_use]
    pub fn get_prize_tier(&self, match_count: u32) -> PrizeTier {
        get_prize_tier(match_count)
    }

    #[must_use]
    pub fn validate_entry(&self, entry: &Entry) -> ValidationResult {
        validate_entry(&self.read(), entry)
    }

    #[must_use]
    pub fn get_winning_level(&self, entries: &[ValidatedEntry]) -> u32 {
        aggregator::get_winning_level(entries)
    }

    #[must_use]
    pub fn get_winners(&self, entries: &[Entry]) -> Vec<Winner> {
        let store = self.read();
        WinnerAggregator::new(&store, &self.config).winners(entries)
    }

    #[must_use]
    pub fn get_winners_by_contest(&self, entries: &[Entry], contest: &ContestId) -> Vec<Winner> {
        let store = self.read();
        WinnerAggregator::new(&store, &self.config).winners_by_contest(entries, contest)
    }

    #[must_use]
    pub fn get_winners_report(&self, entries: &[Entry]) -> WinnersReport {
        build_report(self.get_winners(entries))
    }
}
