//! # lottomatch-ingress
//!
//! **Boundary plane**: turns untyped records into typed ones before they
//! reach the engine.
//!
//! ## Flow
//!
//! ```text
//! results JSON ─ parse_result_records ─┐
//! results feed ─ ResultsFeed ──────────┼→ LotteryValidator::set_results
//! entries JSON ─ parse_entries ────────→ LotteryValidator::get_winners
//! ```
//!
//! Type-invalid rows fail here with `LM_ERR_100`; the engine itself never
//! rejects data.

pub mod feed;
pub mod records;

pub use feed::{FeedDraw, ResultsFeed};
pub use records::{
    entries_from_value, parse_entries, parse_result_records, result_records_from_value,
};
