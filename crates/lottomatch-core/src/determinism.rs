//! Winner-list digests.
//!
//! The same entries against the same results must always yield the same
//! sorted winner list. The `winners_root` is a SHA-256 hash over that list
//! which lets two runs (or two hosts) compare outcomes without shipping the
//! full payload. Entry IDs are excluded so that resubmitted entries hash the
//! same.

use lottomatch_types::{Winner, constants::WINNERS_ROOT_DOMAIN};
use sha2::{Digest, Sha256};

/// Compute the winners root over an ordered winner list.
///
/// The hash depends on, per winner and in order: contest, draw date, match
/// count, chosen numbers, prize and winning level. Order matters.
#[must_use]
pub fn compute_winners_root(winners: &[Winner]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(WINNERS_ROOT_DOMAIN);
    hasher.update((winners.len() as u64).to_le_bytes());

    for winner in winners {
        let contest = winner.entry.contest.as_str().as_bytes();
        let draw_date = winner.entry.draw_date.as_str().as_bytes();
        // Length prefixes keep ("ab","c") and ("a","bc") apart.
        hasher.update((contest.len() as u64).to_le_bytes());
        hasher.update(contest);
        hasher.update((draw_date.len() as u64).to_le_bytes());
        hasher.update(draw_date);
        hasher.update(winner.matches().to_le_bytes());
        hasher.update((winner.entry.chosen_numbers.len() as u64).to_le_bytes());
        for n in &winner.entry.chosen_numbers {
            hasher.update(n.to_le_bytes());
        }
        // Fixed 16-byte encoding; normalized so 500 and 500.0 hash alike.
        hasher.update(winner.prize.normalize().serialize());
        hasher.update(winner.winning_level.to_le_bytes());
    }

    hasher.finalize().into()
}

/// Verify a winner list against an expected root.
#[must_use]
pub fn verify_winners_root(winners: &[Winner], expected_root: &[u8; 32]) -> bool {
    compute_winners_root(winners) == *expected_root
}

/// Hex-encoded winners root, for logs and reports.
#[must_use]
pub fn winners_root_hex(winners: &[Winner]) -> String {
    hex::encode(compute_winners_root(winners))
}
