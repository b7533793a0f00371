//! Concrete games built on the fraction engine.
//!
//! Each game is a `GameRules` implementation plus a builder that deals
//! the initial board. Games never touch the score backend directly;
//! finished boards are handed to the session client.

pub mod make_one;
pub mod reduce;

pub use make_one::{MakeOne, MakeOneBuilder};
pub use reduce::{Reduce, ReduceBuilder};
