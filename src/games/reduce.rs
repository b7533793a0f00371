//! Reduce: rewrite a dealt fraction in lowest terms.

use crate::core::{BoardState, DealConfig, GameConfig, Move, MoveKind, SlotId};
use crate::math::Fraction;
use crate::rules::{GameOutcome, GameRules, MoveOutcome, RejectReason};

/// Points per correctly reduced fraction.
const REDUCE_POINTS: i64 = 5;

/// Bonus for a faultless run: every attempt correct.
const PERFECT_BONUS: i64 = 10;

/// The challenge card always sits in the first (and only) board slot.
const CHALLENGE: SlotId = SlotId::new(0);

/// The reduce game.
///
/// Each round deals one reducible fraction. The answer must name the
/// same value in lowest terms with a positive denominator - the
/// challenge handed back unchanged, or any other reducible or
/// negative-denominator spelling, is wrong. Misses leave the challenge
/// in place for another try; rounds are counted per attempt.
#[derive(Clone, Debug)]
pub struct Reduce {
    config: GameConfig,
}

/// Builder for creating a Reduce game.
pub struct ReduceBuilder {
    rounds: u32,
    deal: DealConfig,
}

impl Default for ReduceBuilder {
    fn default() -> Self {
        Self {
            rounds: 10,
            deal: DealConfig::default(),
        }
    }
}

impl ReduceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must allow at least 1 round");
        self.rounds = rounds;
        self
    }

    pub fn deal(mut self, deal: DealConfig) -> Self {
        // The deal loop keeps drawing until it finds a reducible pair,
        // so the ranges must contain at least one.
        assert!(
            deal.max_numerator >= 2 && deal.max_denominator >= 2,
            "Deal ranges admit no reducible fraction"
        );
        self.deal = deal;
        self
    }

    /// Build the game and deal the first challenge.
    pub fn build(self, seed: u64) -> (Reduce, BoardState) {
        let config = GameConfig::new(1).with_rounds(self.rounds).with_deal(self.deal);
        let game = Reduce { config };

        let mut state = BoardState::new(seed);
        game.deal_challenge(&mut state);

        (game, state)
    }
}

impl Reduce {
    /// Deal the next challenge into the board, drawing until the card is
    /// actually reducible. Returns the dealt card.
    pub fn deal_challenge(&self, state: &mut BoardState) -> Fraction {
        let card = loop {
            let card = state.deal_card(&self.config.deal);
            if card.can_simplify() {
                break card;
            }
        };

        if state.cards.is_empty() {
            state.cards.push(card);
        } else {
            state.replace_card(CHALLENGE, card);
        }
        card
    }

    /// Whether `answer` is the challenge's value in lowest terms.
    fn is_correct(challenge: Fraction, answer: Fraction) -> bool {
        answer.denominator > 0 && !answer.can_simplify() && answer.same_value(challenge)
    }
}

impl GameRules for Reduce {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn game_id(&self) -> &str {
        "reduce"
    }

    fn legal_moves(&self, state: &BoardState) -> Vec<Move> {
        // One right answer exists per challenge; surfacing it doubles as
        // the hint path.
        state
            .card(CHALLENGE)
            .and_then(|card| card.simplify().ok())
            .map(|canonical| vec![Move::answer(CHALLENGE, canonical)])
            .unwrap_or_default()
    }

    fn apply_move(&self, state: &mut BoardState, mv: &Move) -> MoveOutcome {
        let MoveKind::Answer { slot, answer } = mv.kind else {
            return MoveOutcome::Rejected(RejectReason::UnsupportedMove);
        };

        let Some(challenge) = state.card(slot) else {
            return MoveOutcome::Rejected(RejectReason::UnknownSlot);
        };

        if !Self::is_correct(challenge, answer) {
            state.record_attempt(false);
            return MoveOutcome::Rejected(RejectReason::WrongAnswer);
        }

        state.score += REDUCE_POINTS;
        state.record_attempt(true);
        self.deal_challenge(state);
        MoveOutcome::Scored { result: answer }
    }

    fn is_over(&self, state: &BoardState) -> Option<GameOutcome> {
        if state.turn < self.config.rounds {
            return None;
        }

        if state.attempts > 0 && state.correct == state.attempts {
            Some(GameOutcome::Cleared {
                score: state.score + PERFECT_BONUS,
            })
        } else {
            Some(GameOutcome::Finished { score: state.score })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_deals_reducible_challenge() {
        let (_, state) = ReduceBuilder::new().build(42);
        assert_eq!(state.card_count(), 1);
        assert!(state.cards[0].can_simplify());
    }

    #[test]
    fn test_challenges_always_reducible() {
        let (game, mut state) = ReduceBuilder::new().build(42);
        for _ in 0..50 {
            let card = game.deal_challenge(&mut state);
            assert!(card.can_simplify());
            assert_eq!(state.card_count(), 1);
        }
    }

    #[test]
    fn test_correct_answer_scores_and_redeals() {
        let (game, mut state) = ReduceBuilder::new().build(42);
        let challenge = state.cards[0];
        let canonical = challenge.simplify().unwrap();

        let outcome = game.apply_move(&mut state, &Move::answer(CHALLENGE, canonical));

        assert_eq!(outcome, MoveOutcome::Scored { result: canonical });
        assert_eq!(state.score, REDUCE_POINTS);
        assert_eq!(state.correct, 1);
        assert_eq!(state.attempts, 1);

        // A fresh challenge is on the board.
        assert!(state.cards[0].can_simplify());
    }

    #[test]
    fn test_wrong_value_rejected() {
        let (game, mut state) = ReduceBuilder::new().build(42);
        let challenge = state.cards[0];
        let wrong = Fraction::new(challenge.numerator + 1, challenge.denominator);

        let outcome = game.apply_move(&mut state, &Move::answer(CHALLENGE, wrong));

        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::WrongAnswer));
        assert_eq!(state.attempts, 1);
        assert_eq!(state.correct, 0);
        // The challenge stays for another try.
        assert_eq!(state.cards[0], challenge);
    }

    #[test]
    fn test_unreduced_answer_rejected() {
        let (game, mut state) = ReduceBuilder::new().build(42);
        let challenge = state.cards[0];

        // Handing the challenge back names the right value but is not
        // in lowest terms.
        let outcome = game.apply_move(&mut state, &Move::answer(CHALLENGE, challenge));
        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::WrongAnswer));
    }

    #[test]
    fn test_negative_denominator_answer_rejected() {
        let (game, mut state) = ReduceBuilder::new().build(42);
        let challenge = state.cards[0];
        let canonical = challenge.simplify().unwrap();

        // Same value, and can_simplify can't see the shared factor
        // behind the negative denominator - the explicit sign check
        // still refuses it.
        let twisted = Fraction::new(-canonical.numerator, -canonical.denominator);
        assert!(twisted.same_value(challenge));
        assert!(!twisted.can_simplify());

        let outcome = game.apply_move(&mut state, &Move::answer(CHALLENGE, twisted));
        assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::WrongAnswer));
    }

    #[test]
    fn test_combine_unsupported() {
        let (game, mut state) = ReduceBuilder::new().build(42);

        let mv = Move::combine(CHALLENGE, SlotId::new(1), crate::math::Operator::Add);
        assert_eq!(
            game.apply_move(&mut state, &mv),
            MoveOutcome::Rejected(RejectReason::UnsupportedMove)
        );
        assert_eq!(state.attempts, 0);
    }

    #[test]
    fn test_legal_move_is_the_answer() {
        let (game, mut state) = ReduceBuilder::new().build(42);

        let moves = game.legal_moves(&state);
        assert_eq!(moves.len(), 1);
        assert!(game.apply_move(&mut state, &moves[0]).is_scored());
    }

    #[test]
    fn test_perfect_run_is_cleared() {
        let (game, mut state) = ReduceBuilder::new().rounds(5).build(42);

        for _ in 0..5 {
            assert!(game.is_over(&state).is_none());
            let mv = game.legal_moves(&state)[0];
            assert!(game.apply_move(&mut state, &mv).is_scored());
        }

        let outcome = game.is_over(&state).unwrap();
        assert!(outcome.is_cleared());
        assert_eq!(outcome.score(), 5 * REDUCE_POINTS + PERFECT_BONUS);
    }

    #[test]
    fn test_missed_round_finishes_without_bonus() {
        let (game, mut state) = ReduceBuilder::new().rounds(2).build(42);

        let challenge = state.cards[0];
        let wrong = Fraction::new(challenge.numerator + 1, challenge.denominator);
        game.apply_move(&mut state, &Move::answer(CHALLENGE, wrong));

        let mv = game.legal_moves(&state)[0];
        game.apply_move(&mut state, &mv);

        let outcome = game.is_over(&state).unwrap();
        assert!(!outcome.is_cleared());
        assert_eq!(outcome.score(), REDUCE_POINTS);
    }

    #[test]
    fn test_deterministic_deal_sequence() {
        let (game1, mut state1) = ReduceBuilder::new().build(9);
        let (game2, mut state2) = ReduceBuilder::new().build(9);

        for _ in 0..10 {
            assert_eq!(
                game1.deal_challenge(&mut state1),
                game2.deal_challenge(&mut state2)
            );
        }
    }
}
