//! Session client: the seam between finished games and the score backend.
//!
//! The backend itself is out of scope; `ScoreSink` is its stand-in. The
//! client owns the session's identity as explicit configuration passed at
//! construction - there are no process-wide globals to cache a deployment
//! URL or user in.

use rustc_hash::FxHashMap;

use crate::core::state::BoardState;
use crate::rules::GameRules;

use super::report::{GameTally, ScoreReport};

/// Where score reports go.
///
/// Implementations decide what a report earns; the currency policy lives
/// entirely behind this trait.
pub trait ScoreSink {
    /// Submit a report, returning the currency it earned.
    fn submit(&mut self, report: &ScoreReport) -> u64;
}

/// In-memory sink for tests and offline play.
///
/// Records every submission and pays a flat amount per score point.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    /// Every report submitted, in order.
    pub submitted: Vec<ScoreReport>,
    /// Currency paid per positive score point.
    pub pay_per_point: u64,
}

impl MemorySink {
    /// Create a sink paying `pay_per_point` per positive score point.
    #[must_use]
    pub fn new(pay_per_point: u64) -> Self {
        Self {
            submitted: Vec::new(),
            pay_per_point,
        }
    }
}

impl ScoreSink for MemorySink {
    fn submit(&mut self, report: &ScoreReport) -> u64 {
        let earned = u64::try_from(report.score.max(0)).unwrap_or(0) * self.pay_per_point;
        self.submitted.push(report.clone());
        earned
    }
}

/// Session identity, injected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend endpoint this session reports to.
    pub endpoint: String,
    /// The student playing this session.
    pub student: String,
}

impl ClientConfig {
    /// Create a new client configuration.
    pub fn new(endpoint: impl Into<String>, student: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            student: student.into(),
        }
    }
}

/// Per-session score client.
///
/// Aggregates per-game tallies and forwards reports to its sink.
///
/// ## Example
///
/// ```
/// use frac_arcade::score::{ClientConfig, MemorySink, ScoreReport, SessionClient};
///
/// let config = ClientConfig::new("https://scores.example/api", "ada");
/// let mut client = SessionClient::new(config, MemorySink::new(1));
///
/// let earned = client.submit(ScoreReport::new("make-one", 80, 6, 9));
/// assert_eq!(earned, 80);
/// assert_eq!(client.earned(), 80);
/// ```
#[derive(Clone, Debug)]
pub struct SessionClient<S: ScoreSink> {
    config: ClientConfig,
    sink: S,
    earned: u64,
    tallies: FxHashMap<String, GameTally>,
}

impl<S: ScoreSink> SessionClient<S> {
    /// Create a client for one session.
    pub fn new(config: ClientConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            earned: 0,
            tallies: FxHashMap::default(),
        }
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Currency earned so far this session.
    #[must_use]
    pub fn earned(&self) -> u64 {
        self.earned
    }

    /// The aggregate for one game, if it has been played.
    #[must_use]
    pub fn tally(&self, game_id: &str) -> Option<&GameTally> {
        self.tallies.get(game_id)
    }

    /// Borrow the sink (test inspection).
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Submit a report: fold it into the session tallies, forward it to
    /// the sink, and credit the earned currency.
    pub fn submit(&mut self, report: ScoreReport) -> u64 {
        self.tallies
            .entry(report.game_id.clone())
            .or_default()
            .absorb(&report);

        let earned = self.sink.submit(&report);
        self.earned += earned;
        earned
    }

    /// Report a finished (or in-progress) game directly from its rules
    /// and board.
    pub fn submit_game<R: GameRules>(&mut self, rules: &R, state: &BoardState) -> u64 {
        self.submit(rules.report(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_pays_per_point() {
        let mut sink = MemorySink::new(2);
        assert_eq!(sink.submit(&ScoreReport::new("g", 10, 1, 1)), 20);
        assert_eq!(sink.submit(&ScoreReport::new("g", -5, 0, 1)), 0);
        assert_eq!(sink.submitted.len(), 2);
    }

    #[test]
    fn test_client_aggregates_per_game() {
        let mut client = SessionClient::new(
            ClientConfig::new("https://scores.example/api", "ada"),
            MemorySink::new(1),
        );

        client.submit(ScoreReport::new("make-one", 50, 5, 8));
        client.submit(ScoreReport::new("make-one", 30, 3, 4));
        client.submit(ScoreReport::new("reduce", 10, 1, 2));

        let make_one = client.tally("make-one").unwrap();
        assert_eq!(make_one.plays, 2);
        assert_eq!(make_one.score, 80);

        let reduce = client.tally("reduce").unwrap();
        assert_eq!(reduce.plays, 1);

        assert_eq!(client.earned(), 90);
        assert!(client.tally("unknown").is_none());
    }

    #[test]
    fn test_client_forwards_to_sink() {
        let mut client = SessionClient::new(
            ClientConfig::new("https://scores.example/api", "ada"),
            MemorySink::new(1),
        );

        client.submit(ScoreReport::new("reduce", 10, 1, 2));
        assert_eq!(client.sink().submitted.len(), 1);
        assert_eq!(client.sink().submitted[0].game_id, "reduce");
    }
}
