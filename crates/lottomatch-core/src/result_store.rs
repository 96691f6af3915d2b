//! The authoritative winning-numbers table.
//!
//! Results are addressed by [`DrawKey`]. [`ResultStore::set_results`] never
//! merges: it discards the previous table and builds a new one, stamping
//! every record with the same fresh `saved_at`.
//!
//! Rows are stored as supplied. Empty or duplicated winning numbers are not
//! rejected here; they simply produce degenerate matches later.

use std::collections::BTreeMap;

use chrono::Utc;
use lottomatch_types::{
    ContestId, ContestResult, DrawDate, DrawKey, LottomatchError, Result, ResultRecord,
};

/// In-memory table of published results.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: BTreeMap<DrawKey, ContestResult>,
}

impl ResultStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with `records`.
    ///
    /// A later record with the same key as an earlier one wins.
    pub fn set_results(&mut self, records: impl IntoIterator<Item = ResultRecord>) {
        let saved_at = Utc::now();
        let mut results = BTreeMap::new();

        for record in records {
            let key = record.key();
            if results
                .insert(key.clone(), ContestResult::from_record(record, saved_at))
                .is_some()
            {
                tracing::warn!(key = %key, "Duplicate result key, keeping the later record");
            }
        }

        tracing::info!(results = results.len(), "Result table replaced");
        self.results = results;
    }

    /// Exact-key lookup. Absence is normal and never an error.
    #[must_use]
    pub fn get_contest_result(
        &self,
        contest: &ContestId,
        draw_date: &DrawDate,
    ) -> Option<&ContestResult> {
        self.get(&DrawKey {
            contest: contest.clone(),
            draw_date: draw_date.clone(),
        })
    }

    #[must_use]
    pub fn get(&self, key: &DrawKey) -> Option<&ContestResult> {
        self.results.get(key)
    }

    /// Lookup for callers that treat absence as a failure.
    ///
    /// # Errors
    /// Returns [`LottomatchError::ResultNotFound`] if no result is stored
    /// for `key`.
    pub fn require(&self, key: &DrawKey) -> Result<&ContestResult> {
        self.get(key)
            .ok_or_else(|| LottomatchError::ResultNotFound(key.clone()))
    }

    /// All stored results, in key order.
    #[must_use]
    pub fn get_all_results(&self) -> Vec<ContestResult> {
        self.results.values().cloned().collect()
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the store holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
