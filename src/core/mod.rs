//! Core game plumbing: RNG, configuration, moves, board state.
//!
//! This module contains the building blocks shared by every game.
//! Games configure these via `GameConfig` rather than modifying the core.

pub mod config;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{DealConfig, GameConfig};
pub use moves::{Move, MoveKind, SlotId};
pub use rng::{GameRng, GameRngState};
pub use state::BoardState;
