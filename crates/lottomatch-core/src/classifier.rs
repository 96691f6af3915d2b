//! Match count → prize tier.

use lottomatch_types::PrizeTier;

/// Classify a match count. Counts outside 2–5 are [`PrizeTier::NoPrize`].
#[must_use]
pub fn get_prize_tier(match_count: u32) -> PrizeTier {
    PrizeTier::from_match_count(match_count)
}
