//! Prize tiers.
//!
//! Five fixed tiers keyed purely by match count. The count → tier mapping is
//! the explicit [`PRIZE_TIER_TABLE`]; every count not listed there is
//! [`PrizeTier::NoPrize`].
//!
//! On the wire a tier is its presentation descriptor:
//! `{ "tier": "GRAND PRIZE", "color": "gold", "priority": 1, "badge": "badge-gold" }`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONSOLATION_MATCHES, GRAND_PRIZE_MATCHES, SECOND_PRIZE_MATCHES, THIRD_PRIZE_MATCHES,
};
use crate::{LottomatchError, Result};

/// A prize tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "TierDescriptor", try_from = "TierDescriptor")]
pub enum PrizeTier {
    Grand,
    Second,
    Third,
    Consolation,
    NoPrize,
}

/// Match count → tier. Counts absent from this table map to `NoPrize`.
pub const PRIZE_TIER_TABLE: [(u32, PrizeTier); 4] = [
    (GRAND_PRIZE_MATCHES, PrizeTier::Grand),
    (SECOND_PRIZE_MATCHES, PrizeTier::Second),
    (THIRD_PRIZE_MATCHES, PrizeTier::Third),
    (CONSOLATION_MATCHES, PrizeTier::Consolation),
];

impl PrizeTier {
    /// All tiers, best first.
    pub const ALL: [Self; 5] = [
        Self::Grand,
        Self::Second,
        Self::Third,
        Self::Consolation,
        Self::NoPrize,
    ];

    /// Classify a match count. Total: never fails.
    #[must_use]
    pub fn from_match_count(match_count: u32) -> Self {
        PRIZE_TIER_TABLE
            .iter()
            .find(|(count, _)| *count == match_count)
            .map_or(Self::NoPrize, |(_, tier)| *tier)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grand => "GRAND PRIZE",
            Self::Second => "2nd PRIZE",
            Self::Third => "3rd PRIZE",
            Self::Consolation => "CONSOLATION",
            Self::NoPrize => "NO PRIZE",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Grand => "gold",
            Self::Second => "silver",
            Self::Third => "#CD7F32",
            Self::Consolation => "green",
            Self::NoPrize => "gray",
        }
    }

    /// 1 (best) through 5 (no prize).
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Grand => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Consolation => 4,
            Self::NoPrize => 5,
        }
    }

    /// CSS badge class; empty for `NoPrize`.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Grand => "badge-gold",
            Self::Second => "badge-silver",
            Self::Third => "badge-bronze",
            Self::Consolation => "badge-green",
            Self::NoPrize => "",
        }
    }

    #[must_use]
    pub fn descriptor(self) -> TierDescriptor {
        TierDescriptor {
            tier: self.label().to_string(),
            color: self.color().to_string(),
            priority: self.priority(),
            badge: self.badge().to_string(),
        }
    }
}

impl std::fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation descriptor of a tier, as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDescriptor {
    pub tier: String,
    pub color: String,
    pub priority: u8,
    pub badge: String,
}

impl From<PrizeTier> for TierDescriptor {
    fn from(tier: PrizeTier) -> Self {
        tier.descriptor()
    }
}

impl TryFrom<TierDescriptor> for PrizeTier {
    type Error = LottomatchError;

    fn try_from(descriptor: TierDescriptor) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.label() == descriptor.tier)
            .ok_or_else(|| {
                LottomatchError::invalid_input(format!("unknown prize tier {:?}", descriptor.tier))
            })
    }
}
