//! Rules engine trait for game implementations.
//!
//! Games implement `GameRules` to define:
//! - Legal moves for each board
//! - How moves change the board and score
//! - End-of-game conditions
//!
//! The shared plumbing calls into `GameRules` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameOutcome, GameRules, MoveOutcome, RejectReason};
