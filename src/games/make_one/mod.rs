//! Make-one: combine fraction cards until they equal one.

pub mod game;

pub use game::{MakeOne, MakeOneBuilder};
