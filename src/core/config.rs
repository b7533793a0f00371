//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `DealConfig`: The value ranges cards are dealt from
//! - `GameConfig`: Board size, round limit, and the deal
//!
//! Configuration is explicit and constructor-injected - there are no
//! process-wide settings anywhere in the crate.

use serde::{Deserialize, Serialize};

/// Value ranges for dealt fraction cards.
///
/// Both bounds are inclusive and strictly positive: dealt cards are
/// always playable, so every rejected move traces back to the player's
/// arithmetic rather than the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealConfig {
    /// Smallest numerator a dealt card may carry.
    pub min_numerator: i64,
    /// Largest numerator a dealt card may carry.
    pub max_numerator: i64,
    /// Smallest denominator a dealt card may carry.
    pub min_denominator: i64,
    /// Largest denominator a dealt card may carry.
    pub max_denominator: i64,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            min_numerator: 1,
            max_numerator: 9,
            min_denominator: 1,
            max_denominator: 9,
        }
    }
}

impl DealConfig {
    /// Create a deal over `1..=max_numerator` / `1..=max_denominator`.
    #[must_use]
    pub fn up_to(max_numerator: i64, max_denominator: i64) -> Self {
        let deal = Self {
            min_numerator: 1,
            max_numerator,
            min_denominator: 1,
            max_denominator,
        };
        deal.validate();
        deal
    }

    fn validate(&self) {
        assert!(self.min_numerator >= 1, "numerators must be positive");
        assert!(self.min_denominator >= 1, "denominators must be positive");
        assert!(
            self.min_numerator <= self.max_numerator,
            "empty numerator range"
        );
        assert!(
            self.min_denominator <= self.max_denominator,
            "empty denominator range"
        );
    }

    /// Inclusive numerator range for the RNG.
    #[must_use]
    pub fn numerator_range(&self) -> std::ops::RangeInclusive<i64> {
        self.min_numerator..=self.max_numerator
    }

    /// Inclusive denominator range for the RNG.
    #[must_use]
    pub fn denominator_range(&self) -> std::ops::RangeInclusive<i64> {
        self.min_denominator..=self.max_denominator
    }
}

/// Complete game configuration.
///
/// Games provide this at startup; the shared plumbing never hardcodes
/// board sizes or deal ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of card slots on the board.
    pub board_size: usize,

    /// Maximum number of rounds before the game ends.
    pub rounds: u32,

    /// Value ranges cards are dealt from.
    pub deal: DealConfig,
}

impl GameConfig {
    /// Create a configuration with the given board size.
    pub fn new(board_size: usize) -> Self {
        assert!(board_size >= 1, "Board must hold at least 1 card");
        assert!(board_size <= 64, "At most 64 board slots supported");

        Self {
            board_size,
            rounds: 20,
            deal: DealConfig::default(),
        }
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must allow at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the deal ranges.
    #[must_use]
    pub fn with_deal(mut self, deal: DealConfig) -> Self {
        deal.validate();
        self.deal = deal;
        self
    }
}
