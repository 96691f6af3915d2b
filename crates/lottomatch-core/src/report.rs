//! Tier buckets for presentation.
//!
//! Winners are bucketed by their exact match count. `total_winners` counts
//! every winner, so a single-match winning level (reachable when the
//! configured minimum level is 1) shows up in the total but in no bucket.

use lottomatch_types::{
    Winner, WinnersReport,
    constants::{
        CONSOLATION_MATCHES, GRAND_PRIZE_MATCHES, SECOND_PRIZE_MATCHES, THIRD_PRIZE_MATCHES,
    },
};

/// Bucket an already sorted winner list. Bucket order follows the input.
#[must_use]
pub fn build_report(winners: Vec<Winner>) -> WinnersReport {
    let mut report = WinnersReport {
        total_winners: winners.len(),
        ..WinnersReport::default()
    };

    for winner in winners {
        match winner.matches() {
            GRAND_PRIZE_MATCHES => report.grand_prize.push(winner),
            SECOND_PRIZE_MATCHES => report.second_prize.push(winner),
            THIRD_PRIZE_MATCHES => report.third_prize.push(winner),
            CONSOLATION_MATCHES => report.consolation.push(winner),
            _ => {}
        }
    }

    if report.unbucketed() > 0 {
        tracing::debug!(
            total = report.total_winners,
            unbucketed = report.unbucketed(),
            "Winners outside every report bucket"
        );
    }

    report
}
