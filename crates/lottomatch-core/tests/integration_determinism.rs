//! Integration test: determinism verification
//!
//! Given the same result table and the same entries, two independent
//! validators must produce the exact same winner list, and so the same
//! winners root.

use lottomatch_core::{LotteryValidator, compute_winners_root, verify_winners_root};
use lottomatch_types::*;

const CONTESTS: [&str; 3] = ["6398", "6399", "6400"];
const DATES: [&str; 3] = ["2024-04-08", "2024-04-09", "2024-04-10"];

fn build_results() -> Vec<ResultRecord> {
    vec![
        ResultRecord::new(CONTESTS[0], DATES[0], vec![3, 17, 22, 45, 80]),
        ResultRecord::new(CONTESTS[1], DATES[1], vec![5, 6, 7, 8, 9]),
        ResultRecord::new(CONTESTS[2], DATES[2], vec![1, 9, 33, 51, 77]),
    ]
}

/// A fixed batch of entries with known overlaps.
fn build_test_entries() -> Vec<Entry> {
    vec![
        Entry::new(CONTESTS[2], DATES[2], vec![1, 9, 33, 51, 77]),
        Entry::new(CONTESTS[0], DATES[0], vec![3, 17, 22, 1, 2]),
        Entry::new(CONTESTS[1], DATES[1], vec![5, 6, 10, 11, 12]),
        Entry::new(CONTESTS[0], DATES[0], vec![3, 17, 22, 50, 60]),
        Entry::new(CONTESTS[2], DATES[2], vec![1, 9, 2, 3, 4]),
        Entry::new(CONTESTS[1], DATES[1], vec![7, 8, 10, 11, 12]),
    ]
}

/// A larger batch of random entries across every draw.
fn build_random_entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| Entry::random(CONTESTS[i % 3], DATES[i % 3], 5, 80))
        .collect()
}

fn run(entries: &[Entry]) -> Vec<Winner> {
    let v = LotteryValidator::new();
    v.set_results(build_results());
    v.get_winners(entries)
}

#[test]
fn two_validators_same_result() {
    let entries = build_test_entries();

    let winners_a = run(&entries);
    let winners_b = run(&entries);

    assert_eq!(winners_a, winners_b);
    assert_eq!(
        compute_winners_root(&winners_a),
        compute_winners_root(&winners_b),
        "Different validators with same input MUST produce same winners root"
    );
}

#[test]
fn fixed_scenario_outcome() {
    let winners = run(&build_test_entries());

    let summary: Vec<(&str, u32, String)> = winners
        .iter()
        .map(|w| (w.entry.contest.as_str(), w.matches(), w.prize.normalize().to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("6398", 3, "500".to_string()),
            ("6398", 3, "500".to_string()),
            ("6399", 2, "500".to_string()),
            ("6399", 2, "500".to_string()),
            ("6400", 5, "1000".to_string()),
        ]
    );
}

#[test]
fn random_batches_are_reproducible() {
    for _ in 0..10 {
        let entries = build_random_entries(200);
        let winners_a = run(&entries);
        let winners_b = run(&entries);
        let root = compute_winners_root(&winners_a);
        assert!(verify_winners_root(&winners_b, &root));
    }
}

#[test]
fn random_batches_respect_invariants() {
    let entries = build_random_entries(500);
    let winners = run(&entries);

    for w in &winners {
        assert_eq!(w.matches(), w.winning_level);
        assert!(w.winning_level >= 2);
        assert!(w.validation.validated);
    }
    for pair in winners.windows(2) {
        assert!(
            pair[0].entry.contest < pair[1].entry.contest
                || (pair[0].entry.contest == pair[1].entry.contest
                    && pair[0].matches() >= pair[1].matches())
        );
    }

    // Each draw's winners share exactly one pool.
    for (contest, date) in CONTESTS.iter().zip(DATES) {
        let key = DrawKey::new(*contest, date);
        let shares: Vec<_> = winners.iter().filter(|w| w.key() == key).collect();
        if shares.is_empty() {
            continue;
        }
        let total: rust_decimal::Decimal = shares.iter().map(|w| w.prize).sum();
        let pool = rust_decimal::Decimal::new(1000, 0);
        assert!((total - pool).abs() < rust_decimal::Decimal::new(1, 6), "{key}: {total}");
    }
}

#[test]
fn entry_order_within_a_group_does_not_change_the_set() {
    let entries = build_test_entries();
    let mut reversed = entries.clone();
    reversed.reverse();

    let mut a: Vec<_> = run(&entries).into_iter().map(|w| w.entry.id).collect();
    let mut b: Vec<_> = run(&reversed).into_iter().map(|w| w.entry.id).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}
