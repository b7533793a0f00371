//! Score report wire types.
//!
//! The score backend is an external collaborator: it accepts a report of
//! `{gameId, score, correct, total}` and answers with earned currency.
//! The field names here are the backend's, so the serialized form matches
//! the existing contract byte for byte.

use serde::{Deserialize, Serialize};

/// One game's result, as submitted to the score backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Which game produced this result.
    pub game_id: String,

    /// Final score for the play-through.
    pub score: i64,

    /// Moves that scored.
    pub correct: u32,

    /// Moves attempted in total.
    pub total: u32,
}

impl ScoreReport {
    /// Create a new report.
    #[must_use]
    pub fn new(game_id: impl Into<String>, score: i64, correct: u32, total: u32) -> Self {
        Self {
            game_id: game_id.into(),
            score,
            correct,
            total,
        }
    }

    /// Accuracy in `[0, 1]`; `0` when nothing was attempted.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }
}

/// Running per-game aggregate kept on the client side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTally {
    /// Play-throughs submitted.
    pub plays: u32,
    /// Total score across submissions.
    pub score: i64,
    /// Total scored moves across submissions.
    pub correct: u32,
    /// Total attempted moves across submissions.
    pub total: u32,
}

impl GameTally {
    /// Fold one report into the aggregate.
    pub fn absorb(&mut self, report: &ScoreReport) {
        self.plays += 1;
        self.score += report.score;
        self.correct += report.correct;
        self.total += report.total;
    }
}
