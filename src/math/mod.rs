//! The fraction arithmetic engine.
//!
//! A small library of pure functions every game in the crate builds on:
//! number-theory primitives, canonical-form normalization, exact
//! comparators, the proximity-to-one metric, the four rational
//! operations, and the playability predicate. All of it is stateless and
//! referentially transparent - safe to call from anywhere without
//! coordination.

pub mod fraction;
pub mod gcd;
pub mod ops;

pub use fraction::{FracError, FracResult, Fraction};
pub use gcd::{gcd, lcm};
pub use ops::{playable, Operator};
