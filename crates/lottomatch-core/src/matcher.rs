//! Number matching.
//!
//! ```text
//! match_numbers(chosen, winning) -> MatchResult
//! ```
//!
//! Each chosen number is tested for membership in the winning numbers, in
//! chosen order. Neither side is deduplicated: a number chosen twice counts
//! twice when it was drawn, so the count can exceed the number of distinct
//! winning numbers.

use lottomatch_types::{LotteryNumber, MatchResult};

/// Count how many `chosen` numbers appear in `winning`.
///
/// `matched_numbers` preserves the order of `chosen`.
#[must_use]
pub fn match_numbers(chosen: &[LotteryNumber], winning: &[LotteryNumber]) -> MatchResult {
    let matched_numbers: Vec<LotteryNumber> = chosen
        .iter()
        .filter(|n| winning.contains(*n))
        .copied()
        .collect();

    MatchResult {
        count: u32::try_from(matched_numbers.len()).unwrap_or(u32::MAX),
        matched_numbers,
    }
}
