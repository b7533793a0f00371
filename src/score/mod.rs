//! Score reporting: wire types and the session client.
//!
//! Score persistence and ranking live in an external backend. This
//! module owns the typed boundary to it: the report wire format, the
//! `ScoreSink` seam the backend sits behind, and the per-session client
//! that aggregates tallies and forwards reports.

pub mod client;
pub mod report;

pub use client::{ClientConfig, MemorySink, ScoreSink, SessionClient};
pub use report::{GameTally, ScoreReport};
