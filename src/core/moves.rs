//! Move representation: the vocabulary players act with.
//!
//! Two move shapes cover the whole game family:
//! - `Combine`: apply an operator to the cards in two board slots
//! - `Answer`: respond to the card in a slot with a fraction
//!
//! The shared plumbing doesn't interpret moves - each game's rules decide
//! which shapes it accepts and what they mean.

use serde::{Deserialize, Serialize};

use crate::math::{Fraction, Operator};

/// Board slot identifier.
///
/// Slots index the current board; games re-enumerate legal moves after
/// every application, so ids are never held across turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// The shape of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Combine two distinct slots with an operator.
    Combine {
        /// Left operand slot.
        lhs: SlotId,
        /// Right operand slot.
        rhs: SlotId,
        /// The operation to apply.
        op: Operator,
    },
    /// Answer the card in a slot with a fraction.
    Answer {
        /// The slot being answered.
        slot: SlotId,
        /// The player's answer.
        answer: Fraction,
    },
}

/// A complete player move.
///
/// ## Example
///
/// ```
/// use frac_arcade::core::{Move, SlotId};
/// use frac_arcade::math::{Fraction, Operator};
///
/// let combine = Move::combine(SlotId::new(0), SlotId::new(1), Operator::Add);
/// let answer = Move::answer(SlotId::new(2), Fraction::new(1, 2));
/// assert_ne!(combine, answer);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// What the player is doing.
    pub kind: MoveKind,
}

impl Move {
    /// Create a combine move.
    #[must_use]
    pub const fn combine(lhs: SlotId, rhs: SlotId, op: Operator) -> Self {
        Self {
            kind: MoveKind::Combine { lhs, rhs, op },
        }
    }

    /// Create an answer move.
    #[must_use]
    pub const fn answer(slot: SlotId, answer: Fraction) -> Self {
        Self {
            kind: MoveKind::Answer { slot, answer },
        }
    }
}
