//! Per-game mutable state: the board, the RNG, and the running tallies.
//!
//! `BoardState` is everything a game mutates during play. Games hold
//! their rules and configuration separately and stay immutable, so one
//! rules value can drive any number of boards.

use smallvec::SmallVec;

use crate::math::Fraction;

use super::config::DealConfig;
use super::moves::SlotId;
use super::rng::GameRng;

/// Inline capacity for board cards. Boards in this family are small;
/// a dozen slots covers every configured game without heap allocation.
pub type Cards = SmallVec<[Fraction; 12]>;

/// Mutable state for a running game.
#[derive(Clone, Debug)]
pub struct BoardState {
    /// Cards currently on the board, indexed by `SlotId`.
    pub cards: Cards,

    /// Deal randomness. Seeded at construction for deterministic replay.
    pub rng: GameRng,

    /// Rounds played so far.
    pub turn: u32,

    /// Moves that scored.
    pub correct: u32,

    /// Moves attempted, scored or not.
    pub attempts: u32,

    /// Running score. Games decide how moves translate into points.
    pub score: i64,
}

impl BoardState {
    /// Create an empty board with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Cards::new(),
            rng: GameRng::new(seed),
            turn: 0,
            correct: 0,
            attempts: 0,
            score: 0,
        }
    }

    /// Deal one card from the given ranges.
    pub fn deal_card(&mut self, deal: &DealConfig) -> Fraction {
        let numerator = self.rng.gen_range(deal.numerator_range());
        let denominator = self.rng.gen_range(deal.denominator_range());
        Fraction::new(numerator, denominator)
    }

    /// Deal cards until the board holds `target` of them.
    pub fn fill_board(&mut self, deal: &DealConfig, target: usize) {
        while self.cards.len() < target {
            let card = self.deal_card(deal);
            self.cards.push(card);
        }
    }

    /// Get the card in a slot, if the slot is on the board.
    #[must_use]
    pub fn card(&self, slot: SlotId) -> Option<Fraction> {
        self.cards.get(slot.index()).copied()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Remove two distinct slots, returning their cards in `(lhs, rhs)`
    /// order. Returns `None` if either slot is off the board or the
    /// slots are the same.
    pub fn take_pair(&mut self, lhs: SlotId, rhs: SlotId) -> Option<(Fraction, Fraction)> {
        if lhs == rhs {
            return None;
        }
        let a = self.card(lhs)?;
        let b = self.card(rhs)?;

        // Remove the higher index first so the lower stays valid.
        let (hi, lo) = if lhs.index() > rhs.index() {
            (lhs.index(), rhs.index())
        } else {
            (rhs.index(), lhs.index())
        };
        self.cards.remove(hi);
        self.cards.remove(lo);

        Some((a, b))
    }

    /// Replace the card in a slot, returning the old card.
    pub fn replace_card(&mut self, slot: SlotId, card: Fraction) -> Option<Fraction> {
        let old = self.card(slot)?;
        self.cards[slot.index()] = card;
        Some(old)
    }

    /// Record an attempt and bump the turn counter.
    pub fn record_attempt(&mut self, scored: bool) {
        self.attempts += 1;
        self.turn += 1;
        if scored {
            self.correct += 1;
        }
    }
}
