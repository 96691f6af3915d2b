//! # lottomatch-core
//!
//! **Validation and winner-determination engine for Lottomatch.**
//!
//! Data flows one way:
//!
//! ```text
//! ResultStore → validate_entry → WinnerAggregator → build_report
//! ```
//!
//! - **Pure matching**: [`match_numbers`] and [`get_prize_tier`] have no side effects
//! - **Single mutable resource**: the [`ResultStore`] table, replaced wholesale
//! - **Deterministic output**: same results + same entries → same sorted winners
//! - **Pari-mutuel split**: the prize pool is shared evenly among ties
//!
//! [`LotteryValidator`] is the service object that owns the table and
//! exposes every operation.

pub mod aggregator;
pub mod classifier;
pub mod determinism;
pub mod matcher;
pub mod report;
pub mod result_store;
pub mod validator;

pub use aggregator::{
    DrawGroup, ValidatedEntry, WinnerAggregator, get_winning_level, sort_winners, split_prize,
};
pub use classifier::get_prize_tier;
pub use determinism::{compute_winners_root, verify_winners_root, winners_root_hex};
pub use matcher::match_numbers;
pub use report::build_report;
pub use result_store::ResultStore;
pub use validator::{LotteryValidator, validate_entry};
