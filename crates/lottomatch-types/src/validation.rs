//! Match and validation outcomes.

use serde::{Deserialize, Serialize};

use crate::constants::NO_RESULT_MESSAGE;
use crate::{LotteryNumber, PrizeTier};

/// How many chosen numbers hit, and which ones (in chosen order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub count: u32,
    pub matched_numbers: Vec<LotteryNumber>,
}

/// Outcome of validating one entry.
///
/// `validated` is `false` only when no result is stored for the entry's
/// draw; every other field is then absent and `message` explains why.
/// A validated entry always carries `matches`, `matched_numbers`,
/// `prize_tier` and `winning_numbers`, even with zero matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_numbers: Option<Vec<LotteryNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_tier: Option<PrizeTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_numbers: Option<Vec<LotteryNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// The entry's draw has no published result.
    #[must_use]
    pub fn no_result() -> Self {
        Self {
            validated: false,
            matches: None,
            matched_numbers: None,
            prize_tier: None,
            winning_numbers: None,
            message: Some(NO_RESULT_MESSAGE.to_string()),
        }
    }

    #[must_use]
    pub fn matched(
        result: MatchResult,
        prize_tier: PrizeTier,
        winning_numbers: Vec<LotteryNumber>,
    ) -> Self {
        Self {
            validated: true,
            matches: Some(result.count),
            matched_numbers: Some(result.matched_numbers),
            prize_tier: Some(prize_tier),
            winning_numbers: Some(winning_numbers),
            message: None,
        }
    }

    /// Match count of a validated entry; `None` when not validated.
    #[must_use]
    pub fn match_count(&self) -> Option<u32> {
        if self.validated { self.matches } else { None }
    }
}
