use super::decision::Decision;
use super::tally::Tally;
use crate::Probability;
use crate::Utility;
use crate::cards::Hole;
use std::collections::BTreeMap;
use std::time::Duration;

/// What one search learned: per-candidate statistics plus the aggregate.
///
/// Only candidates that were visited at least once appear in the table.
/// The snapshot is immutable; a new search starts from nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    tallies: BTreeMap<Hole, Tally>,
    candidates: usize,
    rollouts: usize,
    elapsed: Duration,
}

impl Estimate {
    pub fn new(
        tallies: BTreeMap<Hole, Tally>,
        candidates: usize,
        rollouts: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            tallies,
            candidates,
            rollouts,
            elapsed,
        }
    }
    /// nothing to search over
    pub fn degenerate(elapsed: Duration) -> Self {
        Self::new(BTreeMap::new(), 0, 0, elapsed)
    }

    pub fn tallies(&self) -> &BTreeMap<Hole, Tally> {
        &self.tallies
    }
    pub fn candidates(&self) -> usize {
        self.candidates
    }
    pub fn rollouts(&self) -> usize {
        self.rollouts
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    pub fn wins(&self) -> Utility {
        self.tallies.values().map(Tally::wins).sum()
    }
    /// aggregate over every rollout, 0 when none completed
    pub fn win_rate(&self) -> Probability {
        match self.rollouts {
            0 => 0.0,
            n => self.wins() / n as Probability,
        }
    }
    pub fn decision(&self, threshold: Probability) -> Decision {
        Decision::from_win_rate(self.win_rate(), threshold)
    }
    /// The `n` candidates the bandit spent the most rollouts on.
    pub fn most_visited(&self, n: usize) -> Vec<(Hole, Tally)> {
        let mut ranked = self
            .tallies
            .iter()
            .map(|(hole, tally)| (*hole, *tally))
            .collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.visits().cmp(&a.visits()));
        ranked.truncate(n);
        ranked
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>7} rollouts {:>4}/{:<4} hands {:>8.2?}  win rate {:.3}",
            self.rollouts,
            self.tallies.len(),
            self.candidates,
            self.elapsed,
            self.win_rate(),
        )
    }
}
