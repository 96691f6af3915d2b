//! # lottomatch-types
//!
//! Shared types, errors, and configuration for the **Lottomatch** engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ContestId`], [`DrawDate`], [`DrawKey`], [`EntryId`]
//! - **Records**: [`ResultRecord`], [`ContestResult`], [`Entry`]
//! - **Outcomes**: [`MatchResult`], [`ValidationResult`], [`PrizeTier`]
//! - **Aggregation output**: [`Winner`], [`WinnersReport`]
//! - **Configuration**: [`ValidatorConfig`]
//! - **Errors**: [`LottomatchError`] with `LM_ERR_` prefix codes
//! - **Constants**: prize pool, tier match counts, messages

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod record;
pub mod tier;
pub mod validation;
pub mod winner;

// Re-export all primary types at crate root for ergonomic imports:
//   use lottomatch_types::{Entry, ResultRecord, Winner, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use record::*;
pub use tier::*;
pub use validation::*;
pub use winner::*;

// Constants are accessed via `lottomatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
