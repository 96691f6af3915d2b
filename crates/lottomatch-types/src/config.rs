//! Configuration for the validation service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LottomatchError, Result, constants};

/// Tunables for a validator instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Pool split evenly among the tied winners of each draw group.
    pub prize_pool: Decimal,
    /// Groups whose winning level is below this produce no winners.
    /// Level 0 never produces winners, whatever this is set to.
    pub min_winning_level: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            prize_pool: Decimal::new(constants::DEFAULT_PRIZE_POOL, 0),
            min_winning_level: constants::DEFAULT_MIN_WINNING_LEVEL,
        }
    }
}

impl ValidatorConfig {
    /// Check the config is usable.
    ///
    /// # Errors
    /// [`LottomatchError::PrizePoolInvalid`] for a negative pool,
    /// [`LottomatchError::Configuration`] for a zero minimum level.
    pub fn validate(&self) -> Result<()> {
        if self.prize_pool < Decimal::ZERO {
            return Err(LottomatchError::PrizePoolInvalid {
                reason: format!("pool {} is negative", self.prize_pool),
            });
        }
        if self.min_winning_level == 0 {
            return Err(LottomatchError::Configuration(
                "min_winning_level must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
