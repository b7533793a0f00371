//! Make-one game implementation.

use crate::core::{BoardState, DealConfig, GameConfig, Move, MoveKind, SlotId};
use crate::math::{playable, Operator};
use crate::rules::{GameOutcome, GameRules, MoveOutcome, RejectReason};

/// Points for combining a pair into a value of one.
const MATCH_POINTS: i64 = 10;

/// Extra points when the result is the exact canonical `1/1`.
const EXACT_BONUS: i64 = 5;

/// Bonus for clearing every card off the board.
const CLEAR_BONUS: i64 = 20;

/// Scale for the end-of-game partial credit: the best remaining card's
/// proximity to one, in `[0, 1]`, times this.
const PROXIMITY_BONUS: f64 = 10.0;

/// The make-one game.
///
/// The board holds a spread of fraction cards. Each move combines two
/// cards with an operator: a result equal to one scores and removes the
/// pair; any other playable result replaces the pair and stays in play;
/// everything else is rejected. When play ends with cards remaining, the
/// card closest to one earns partial credit.
#[derive(Clone, Debug)]
pub struct MakeOne {
    config: GameConfig,
}

/// Builder for creating a MakeOne game.
pub struct MakeOneBuilder {
    board_size: usize,
    rounds: u32,
    deal: DealConfig,
}

impl Default for MakeOneBuilder {
    fn default() -> Self {
        Self {
            board_size: 8,
            rounds: 20,
            deal: DealConfig::default(),
        }
    }
}

impl MakeOneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_size(mut self, size: usize) -> Self {
        assert!((2..=12).contains(&size), "Board size must be 2-12");
        self.board_size = size;
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must allow at least 1 round");
        self.rounds = rounds;
        self
    }

    pub fn deal(mut self, deal: DealConfig) -> Self {
        self.deal = deal;
        self
    }

    /// Build the game and deal the initial board.
    pub fn build(self, seed: u64) -> (MakeOne, BoardState) {
        let config = GameConfig::new(self.board_size)
            .with_rounds(self.rounds)
            .with_deal(self.deal);

        let mut state = BoardState::new(seed);
        state.fill_board(&config.deal, config.board_size);

        (MakeOne { config }, state)
    }
}

impl MakeOne {
    /// The best proximity-to-one among the remaining cards.
    fn best_proximity(&self, state: &BoardState) -> f64 {
        state
            .cards
            .iter()
            .map(|card| card.proximity_to_one())
            .fold(0.0, f64::max)
    }

    fn partial_credit(&self, state: &BoardState) -> i64 {
        (self.best_proximity(state) * PROXIMITY_BONUS).round() as i64
    }
}

impl GameRules for MakeOne {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn game_id(&self) -> &str {
        "make-one"
    }

    fn legal_moves(&self, state: &BoardState) -> Vec<Move> {
        let mut moves = Vec::new();

        // Ordered pairs: subtraction and division care about direction.
        for lhs in 0..state.card_count() {
            for rhs in (0..state.card_count()).filter(|&rhs| rhs != lhs) {
                let (a, b) = (state.cards[lhs], state.cards[rhs]);
                for op in Operator::ALL {
                    if playable(op.apply(a, b)) {
                        moves.push(Move::combine(
                            SlotId::new(lhs as u8),
                            SlotId::new(rhs as u8),
                            op,
                        ));
                    }
                }
            }
        }

        moves
    }

    fn apply_move(&self, state: &mut BoardState, mv: &Move) -> MoveOutcome {
        let MoveKind::Combine { lhs, rhs, op } = mv.kind else {
            return MoveOutcome::Rejected(RejectReason::UnsupportedMove);
        };

        if lhs == rhs {
            return MoveOutcome::Rejected(RejectReason::SameSlot);
        }
        let (Some(a), Some(b)) = (state.card(lhs), state.card(rhs)) else {
            return MoveOutcome::Rejected(RejectReason::UnknownSlot);
        };

        let result = match op.apply(a, b) {
            Ok(result) => result,
            Err(e) => {
                state.record_attempt(false);
                return MoveOutcome::Rejected(RejectReason::Arithmetic(e));
            }
        };

        if !result.is_playable() {
            state.record_attempt(false);
            return MoveOutcome::Rejected(RejectReason::Unplayable);
        }

        if result.is_one() {
            state.take_pair(lhs, rhs);
            state.score += MATCH_POINTS;
            if result.is_exact_one() {
                state.score += EXACT_BONUS;
            }
            state.record_attempt(true);
            return MoveOutcome::Scored { result };
        }

        // Keep playing: the pair collapses into its (unreduced) result.
        state.replace_card(lhs, result);
        state.cards.remove(rhs.index());
        state.record_attempt(false);
        MoveOutcome::Played { result }
    }

    fn is_over(&self, state: &BoardState) -> Option<GameOutcome> {
        if state.cards.is_empty() {
            return Some(GameOutcome::Cleared {
                score: state.score + CLEAR_BONUS,
            });
        }

        if state.card_count() < 2 || state.turn >= self.config.rounds {
            return Some(GameOutcome::Finished {
                score: state.score + self.partial_credit(state),
            });
        }

        None
    }
}
