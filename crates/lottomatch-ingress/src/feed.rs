//! The published results feed.
//!
//! The results publisher emits one JSON document listing every draw:
//!
//! ```text
//! { "results": [{ "drawNumber": 6400, "date": "2024-04-10", "numbers": [..] }],
//!   "lastUpdated": "2024-04-10T21:00:00Z" }
//! ```
//!
//! A draw number identifies the contest, so each feed draw converts into a
//! [`ResultRecord`] keyed by `(drawNumber, date)`.

use chrono::{DateTime, Utc};
use lottomatch_types::{LotteryNumber, Result, ResultRecord};
use serde::{Deserialize, Serialize};

/// One draw as published in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDraw {
    pub draw_number: u64,
    pub date: String,
    pub numbers: Vec<LotteryNumber>,
}

impl FeedDraw {
    #[must_use]
    pub fn to_result_record(&self) -> ResultRecord {
        ResultRecord::new(
            self.draw_number.to_string().as_str(),
            self.date.as_str(),
            self.numbers.clone(),
        )
    }
}

/// The whole feed document. A missing `results` list is an empty feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsFeed {
    #[serde(default)]
    pub results: Vec<FeedDraw>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ResultsFeed {
    /// Parse a feed document.
    ///
    /// # Errors
    /// [`lottomatch_types::LottomatchError::Serialization`] if the document
    /// is not a valid feed.
    pub fn from_json(json: &str) -> Result<Self> {
        let feed: Self = serde_json::from_str(json)?;
        tracing::debug!(
            draws = feed.results.len(),
            last_updated = ?feed.last_updated,
            "Results feed parsed"
        );
        Ok(feed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Draws ordered by draw number, newest first.
    #[must_use]
    pub fn sorted_newest_first(&self) -> Vec<&FeedDraw> {
        let mut draws: Vec<&FeedDraw> = self.results.iter().collect();
        draws.sort_by(|a, b| b.draw_number.cmp(&a.draw_number));
        draws
    }

    /// The draw with the highest draw number.
    #[must_use]
    pub fn latest(&self) -> Option<&FeedDraw> {
        self.sorted_newest_first().into_iter().next()
    }

    /// Every draw except the latest, newest first.
    #[must_use]
    pub fn previous(&self) -> Vec<&FeedDraw> {
        self.sorted_newest_first().into_iter().skip(1).collect()
    }

    /// Result records for every draw, in feed order.
    #[must_use]
    pub fn to_result_records(&self) -> Vec<ResultRecord> {
        self.results.iter().map(FeedDraw::to_result_record).collect()
    }
}
