//! System-wide constants for the Lottomatch engine.

/// Prize pool divided among the tied winners of a single draw group.
pub const DEFAULT_PRIZE_POOL: i64 = 1000;

/// Lowest group winning level that produces winners by default.
///
/// Equal to [`CONSOLATION_MATCHES`], the smallest prize-bearing tier.
pub const DEFAULT_MIN_WINNING_LEVEL: u32 = CONSOLATION_MATCHES;

/// Match count for the grand prize tier.
pub const GRAND_PRIZE_MATCHES: u32 = 5;

/// Match count for the second prize tier.
pub const SECOND_PRIZE_MATCHES: u32 = 4;

/// Match count for the third prize tier.
pub const THIRD_PRIZE_MATCHES: u32 = 3;

/// Match count for the consolation tier.
pub const CONSOLATION_MATCHES: u32 = 2;

/// Message attached to a validation when no result exists for the entry's draw.
pub const NO_RESULT_MESSAGE: &str = "No winning numbers set for this contest";

/// Domain separator for the winner-list digest.
pub const WINNERS_ROOT_DOMAIN: &[u8] = b"lottomatch:winners_root:v1:";
