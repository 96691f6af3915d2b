//! Integration test: the engine's observable properties.
//!
//! Every check here goes through the public `LotteryValidator` surface.

use lottomatch_core::LotteryValidator;
use lottomatch_types::*;
use rust_decimal::Decimal;

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn validator_with(records: Vec<ResultRecord>) -> LotteryValidator {
    let v = LotteryValidator::new();
    v.set_results(records);
    v
}

#[test]
fn absent_result_never_validates() {
    let v = validator_with(vec![ResultRecord::dummy()]);
    let entries = vec![
        Entry::new("6000", "2024-01-07", vec![1, 2, 3, 4, 5]),
        Entry::new("6001", "2024-01-06", vec![1, 2, 3, 4, 5]),
        Entry::new("6000_2024", "01-06", vec![1, 2, 3, 4, 5]),
    ];
    for entry in &entries {
        assert!(
            v.get_contest_result(&entry.contest, &entry.draw_date).is_none(),
            "unexpected result for {entry}"
        );
        assert!(!v.validate_entry(entry).validated);
    }
}

#[test]
fn tied_grand_prize_splits_and_lower_match_excluded() {
    let v = validator_with(vec![ResultRecord::new(
        "6000",
        "2024-01-06",
        vec![1, 2, 3, 4, 5],
    )]);
    let entries = vec![
        Entry::dummy(vec![1, 2, 3, 4, 5]),
        Entry::dummy(vec![5, 4, 3, 2, 1]),
        Entry::dummy(vec![1, 2, 3, 60, 70]),
    ];

    let winners = v.get_winners(&entries);

    assert_eq!(winners.len(), 2);
    for w in &winners {
        assert_eq!(w.prize, dec(500));
        assert_eq!(w.winning_level, 5);
        assert_eq!(w.prize_tier(), PrizeTier::Grand);
    }
    assert!(
        winners
            .iter()
            .all(|w| w.entry.id != entries[2].id),
        "3-match entry must not win"
    );
}

#[test]
fn single_match_best_produces_no_winners() {
    let v = validator_with(vec![ResultRecord::dummy()]);
    let entries = vec![
        Entry::dummy(vec![1, 60, 70, 80, 90]),
        Entry::dummy(vec![61, 62, 63, 64, 65]),
    ];
    assert!(v.get_winners(&entries).is_empty());
    assert_eq!(v.get_winners_report(&entries).total_winners, 0);
}

#[test]
fn zero_match_group_produces_no_winners() {
    let v = validator_with(vec![ResultRecord::dummy()]);
    let entries = vec![Entry::dummy(vec![60, 70]), Entry::dummy(vec![61])];
    assert!(v.get_winners(&entries).is_empty());
}

#[test]
fn duplicate_chosen_numbers_inflate_matches() {
    let v = validator_with(vec![ResultRecord::new("6000", "2024-01-06", vec![2])]);
    let entries = vec![Entry::dummy(vec![2, 2]), Entry::dummy(vec![2, 9])];
    let winners = v.get_winners(&entries);
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].matches(), 2);
    assert_eq!(winners[0].prize, dec(1000));
}

#[test]
fn winners_sorted_by_contest_then_matches() {
    let v = validator_with(vec![
        ResultRecord::new("B", "2024-01-01", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("B", "2024-01-02", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("A", "2024-01-01", vec![1, 2, 3, 4, 5]),
    ]);
    let entries = vec![
        Entry::new("B", "2024-01-01", vec![1, 2]),
        Entry::new("B", "2024-01-02", vec![1, 2, 3, 4]),
        Entry::new("A", "2024-01-01", vec![1, 2, 3]),
        Entry::new("B", "2024-01-01", vec![3, 4]),
    ];

    let winners = v.get_winners(&entries);
    let summary: Vec<(&str, u32)> = winners
        .iter()
        .map(|w| (w.entry.contest.as_str(), w.matches()))
        .collect();
    assert_eq!(summary, vec![("A", 3), ("B", 4), ("B", 2), ("B", 2)]);

    for pair in winners.windows(2) {
        if pair[0].entry.contest == pair[1].entry.contest {
            assert!(pair[0].matches() >= pair[1].matches());
        } else {
            assert!(pair[0].entry.contest < pair[1].entry.contest);
        }
    }

    // Ties in the same group keep their input order.
    assert_eq!(winners[2].entry.id, entries[0].id);
    assert_eq!(winners[3].entry.id, entries[3].id);
    assert_eq!(winners[2].prize, dec(500));
}

#[test]
fn each_draw_group_has_its_own_pool() {
    let v = validator_with(vec![
        ResultRecord::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("6000", "2024-01-13", vec![1, 2, 3, 4, 5]),
    ]);
    let entries = vec![
        Entry::new("6000", "2024-01-06", vec![1, 2, 3]),
        Entry::new("6000", "2024-01-06", vec![1, 2, 3]),
        Entry::new("6000", "2024-01-13", vec![1, 2]),
    ];
    let winners = v.get_winners(&entries);
    assert_eq!(winners.len(), 3);
    let total: Decimal = winners.iter().map(|w| w.prize).sum();
    assert_eq!(total, dec(2000));
    assert_eq!(winners[2].winning_level, 2);
    assert_eq!(winners[2].prize, dec(1000));
}

#[test]
fn report_total_matches_winner_count() {
    let v = validator_with(vec![
        ResultRecord::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("6001", "2024-01-08", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("6002", "2024-01-09", vec![1, 2, 3, 4, 5]),
    ]);
    let entries = vec![
        Entry::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5]),
        Entry::new("6001", "2024-01-08", vec![1, 2, 3, 4]),
        Entry::new("6001", "2024-01-08", vec![2, 3, 4, 5]),
        Entry::new("6002", "2024-01-09", vec![1, 2]),
        Entry::new("6003", "2024-01-10", vec![1, 2, 3, 4, 5]),
    ];

    let report = v.get_winners_report(&entries);
    assert_eq!(report.total_winners, v.get_winners(&entries).len());
    assert_eq!(report.grand_prize.len(), 1);
    assert_eq!(report.second_prize.len(), 2);
    assert_eq!(report.third_prize.len(), 0);
    assert_eq!(report.consolation.len(), 1);
    assert_eq!(report.second_prize[0].prize, dec(500));
}

#[test]
fn single_match_level_reported_outside_buckets_when_allowed() {
    let v = LotteryValidator::with_config(ValidatorConfig {
        min_winning_level: 1,
        ..ValidatorConfig::default()
    })
    .unwrap();
    v.set_results(vec![ResultRecord::dummy()]);
    let entries = vec![Entry::dummy(vec![1, 60]), Entry::dummy(vec![2, 61])];

    let report = v.get_winners_report(&entries);
    assert_eq!(report.total_winners, 2);
    assert_eq!(report.bucketed(), 0);
    assert_eq!(report.unbucketed(), 2);
}

#[test]
fn winners_by_contest_ignores_other_contests() {
    let v = validator_with(vec![
        ResultRecord::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("6001", "2024-01-08", vec![1, 2, 3, 4, 5]),
    ]);
    let entries = vec![
        Entry::new("6000", "2024-01-06", vec![1, 2, 3]),
        Entry::new("6001", "2024-01-08", vec![1, 2, 3, 4, 5]),
        Entry::new("6001", "2024-01-08", vec![1, 2]),
    ];

    let winners = v.get_winners_by_contest(&entries, &ContestId::from("6001"));
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].matches(), 5);

    let none = v.get_winners_by_contest(&entries, &ContestId::from("7777"));
    assert!(none.is_empty());
}

#[test]
fn set_results_idempotent_except_saved_at() {
    let records = vec![
        ResultRecord::new("6000", "2024-01-06", vec![1, 2, 3, 4, 5]),
        ResultRecord::new("6001", "2024-01-08", vec![6, 7, 8, 9, 10]),
    ];
    let v = LotteryValidator::new();

    v.set_results(records.clone());
    let first: Vec<ContestResult> = v.get_all_results();
    v.set_results(records.clone());
    let second: Vec<ContestResult> = v.get_all_results();

    assert_eq!(first.len(), second.len());
    for record in &records {
        let a = first.iter().find(|r| r.key() == record.key()).unwrap();
        let b = v
            .get_contest_result(&record.contest, &record.draw_date)
            .unwrap();
        assert_eq!(a.contest, b.contest);
        assert_eq!(a.draw_date, b.draw_date);
        assert_eq!(a.winning_numbers, b.winning_numbers);
        assert!(b.saved_at >= a.saved_at);
    }
}
