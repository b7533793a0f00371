//! Rules engine trait for game implementations.
//!
//! Games implement `GameRules` to define their rules:
//! - Which moves are legal
//! - How moves change the board and score
//! - When the game is over
//!
//! Rules values are immutable; all mutation happens on the `BoardState`
//! passed in, so one rules value can drive any number of boards.

use crate::core::config::GameConfig;
use crate::core::moves::Move;
use crate::core::state::BoardState;
use crate::math::{FracError, Fraction};
use crate::score::ScoreReport;

/// Why a move was refused. The board is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// A referenced slot is not on the board.
    UnknownSlot,
    /// A combine named the same slot twice.
    SameSlot,
    /// The move shape is not one this game accepts.
    UnsupportedMove,
    /// The arithmetic succeeded but the result is not playable.
    Unplayable,
    /// The arithmetic itself failed.
    Arithmetic(FracError),
    /// An answer move named the wrong value or an unreduced form.
    WrongAnswer,
}

/// Result of applying a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and scored.
    Scored {
        /// The fraction the move produced.
        result: Fraction,
    },
    /// The move was applied without scoring; the board changed.
    Played {
        /// The fraction the move produced.
        result: Fraction,
    },
    /// The move was refused.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Did the move change the board?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Scored { .. } | MoveOutcome::Played { .. })
    }

    /// Did the move score?
    #[must_use]
    pub fn is_scored(&self) -> bool {
        matches!(self, MoveOutcome::Scored { .. })
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The board was fully cleared.
    Cleared {
        /// Final score, including any end-of-game bonus.
        score: i64,
    },
    /// Play ended with cards remaining: no moves left or the round
    /// limit was reached.
    Finished {
        /// Final score, including any end-of-game bonus.
        score: i64,
    },
}

impl GameOutcome {
    /// The final score.
    #[must_use]
    pub fn score(&self) -> i64 {
        match self {
            GameOutcome::Cleared { score } | GameOutcome::Finished { score } => *score,
        }
    }

    /// Whether the board was fully cleared.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        matches!(self, GameOutcome::Cleared { .. })
    }
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules. The shared plumbing
/// calls these methods during play and never interprets game-specific
/// concepts directly.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty when no move can be applied
/// - `apply_move`: Must be deterministic aside from `state.rng` draws
/// - `is_over`: Return `None` while the game continues
pub trait GameRules {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Stable identifier reported to the score backend.
    fn game_id(&self) -> &str;

    /// Enumerate the legal moves on the current board.
    fn legal_moves(&self, state: &BoardState) -> Vec<Move>;

    /// Apply a move, updating board, tallies, and score.
    fn apply_move(&self, state: &mut BoardState, mv: &Move) -> MoveOutcome;

    /// Check whether the game is over.
    ///
    /// Returns `Some(outcome)` once play has ended, `None` while it
    /// continues.
    fn is_over(&self, state: &BoardState) -> Option<GameOutcome>;

    // === Convenience Methods ===

    /// Build the score report for the current board.
    ///
    /// Once the game is over the report carries the final outcome score
    /// (bonuses included); before that, the running score.
    fn report(&self, state: &BoardState) -> ScoreReport {
        let score = self
            .is_over(state)
            .map_or(state.score, |outcome| outcome.score());

        ScoreReport {
            game_id: self.game_id().to_string(),
            score,
            correct: state.correct,
            total: state.attempts,
        }
    }
}
