//! # frac-arcade
//!
//! A fraction-arithmetic game engine for educational math games.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: The fraction engine is a library of pure functions.
//!    Exact rational semantics, failures as values, no floats in any
//!    equality decision.
//!
//! 2. **Raw In, Canonical Out**: Every function accepts raw pairs
//!    (negative denominators, reducible forms). Canonical form is only
//!    guaranteed on `simplify` output and never assumed on input.
//!
//! 3. **Configuration Over Globals**: Games and the session client take
//!    explicit configuration at construction. Nothing in the crate reads
//!    process-wide state.
//!
//! ## Architecture
//!
//! Data flows one way: games deal fraction cards, feed pairs through the
//! arithmetic engine, gate the results with the validity predicates, and
//! hand finished boards to the session client for score reporting. No
//! layer holds state across calls except the per-game `BoardState`.
//!
//! ## Modules
//!
//! - `math`: The fraction engine - gcd/lcm, normalization, comparators,
//!   proximity metric, the four operations, playability
//! - `core`: Shared plumbing - deterministic RNG, configuration, moves,
//!   board state
//! - `rules`: The `GameRules` trait games implement
//! - `games`: Concrete games (make-one, reduce)
//! - `score`: Report wire types and the session client

pub mod core;
pub mod games;
pub mod math;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::math::{gcd, lcm, playable, FracError, FracResult, Fraction, Operator};

pub use crate::core::{
    BoardState, DealConfig, GameConfig, GameRng, GameRngState, Move, MoveKind, SlotId,
};

pub use crate::rules::{GameOutcome, GameRules, MoveOutcome, RejectReason};

pub use crate::games::{MakeOne, MakeOneBuilder, Reduce, ReduceBuilder};

pub use crate::score::{
    ClientConfig, GameTally, MemorySink, ScoreReport, ScoreSink, SessionClient,
};
