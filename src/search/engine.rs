use super::config::Config;
use super::decision::Decision;
use super::estimate::Estimate;
use super::limit::Interrupt;
use super::limit::Limit;
use super::rollout::rollout;
use super::tally::Tally;
use crate::Error;
use crate::Result;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Hole;
use crate::cards::Street;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;
use std::collections::BTreeMap;
use std::time::Instant;

/// Bandit-guided Monte Carlo search over the opponent's possible holes.
///
/// Every unordered pair of unseen cards is an arm. Each step draws a small
/// random subset of arms, pulls the one with the best UCB1 score by dealing
/// out a random rest-of-board, and records the showdown. When the budget
/// runs out the pooled win rate decides between staying and folding.
///
/// A search owns its random source. Seeding it through [`Config::seed`]
/// makes a rollout-capped search reproducible.
pub struct Search {
    config: Config,
    rng: SmallRng,
    interrupt: Interrupt,
}

impl Search {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            interrupt: Interrupt::default(),
        }
    }
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    /// Stay or fold at a decision point.
    pub fn decide(&mut self, hole: Hole, board: Board) -> Result<Decision> {
        let estimate = self.estimate(hole, board)?;
        let decision = estimate.decision(self.config.threshold);
        log::debug!("{:<7} {} | {} | {} -> {}", board.street(), hole, board, estimate, decision);
        Ok(decision)
    }

    /// Run the search and return everything it learned.
    pub fn estimate(&mut self, hole: Hole, board: Board) -> Result<Estimate> {
        let start = Instant::now();
        let limit = Limit::new(self.config.budget(), self.config.rollouts, self.interrupt());
        let hero = Hand::from(hole);
        let seen = Hand::from(board);
        if board.street() == Street::Rive {
            return Err(Error::InvalidInput(format!("no decision on the river: {}", board)));
        }
        if !hero.is_disjoint(&seen) {
            return Err(Error::InvalidInput(format!("hole {} overlaps board {}", hole, board)));
        }
        let candidates = HandIterator::from((2, Hand::add(hero, seen)))
            .filter_map(|hand| Hole::try_from(hand).ok())
            .collect::<Vec<Hole>>();
        if candidates.is_empty() {
            log::warn!("no opponent holes left for {} on {}", hole, board);
            return Ok(Estimate::degenerate(start.elapsed()));
        }
        let (table, rollouts) = self.explore(hole, seen, &candidates, &limit)?;
        let tallies = candidates
            .iter()
            .copied()
            .zip(table)
            .filter(|(_, tally)| tally.visits() > 0)
            .collect::<BTreeMap<Hole, Tally>>();
        Ok(Estimate::new(tallies, candidates.len(), rollouts, start.elapsed()))
    }

    /// fresh seed for each worker, drawn from the search's own rng
    fn seeds(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.rng.random::<u64>()).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn explore(
        &mut self,
        hole: Hole,
        board: Hand,
        candidates: &[Hole],
        limit: &Limit,
    ) -> Result<(Vec<Tally>, usize)> {
        let seed = self.seeds(1)[0];
        Worker::new(hole, board, candidates, &self.config, limit.clone(), seed).run()
    }

    /// Root parallelism: every worker runs its own bandit over its own
    /// table under the shared deadline, and the tables are summed after.
    #[cfg(feature = "parallel")]
    fn explore(
        &mut self,
        hole: Hole,
        board: Hand,
        candidates: &[Hole],
        limit: &Limit,
    ) -> Result<(Vec<Tally>, usize)> {
        use rayon::prelude::*;
        let n = self.config.workers.max(1);
        let seeds = self.seeds(n);
        let config = &self.config;
        if n == 1 {
            return Worker::new(hole, board, candidates, config, limit.clone(), seeds[0]).run();
        }
        seeds
            .into_par_iter()
            .enumerate()
            .map(|(i, seed)| Worker::new(hole, board, candidates, config, limit.split(i, n), seed))
            .map(Worker::run)
            .collect::<Result<Vec<_>>>()
            .map(|results| {
                results.into_iter().fold(
                    (vec![Tally::default(); candidates.len()], 0),
                    |(mut table, total), (other, rollouts)| {
                        table.iter_mut().zip(other.iter()).for_each(|(a, b)| a.merge(b));
                        (table, total + rollouts)
                    },
                )
            })
    }
}

/// One rollout loop over one table.
struct Worker<'a> {
    hole: Hole,
    board: Hand,
    candidates: &'a [Hole],
    config: &'a Config,
    limit: Limit,
    rng: SmallRng,
    table: Vec<Tally>,
    rollouts: usize,
}

impl<'a> Worker<'a> {
    fn new(
        hole: Hole,
        board: Hand,
        candidates: &'a [Hole],
        config: &'a Config,
        limit: Limit,
        seed: u64,
    ) -> Self {
        Self {
            hole,
            board,
            candidates,
            config,
            limit,
            rng: SmallRng::seed_from_u64(seed),
            table: vec![Tally::default(); candidates.len()],
            rollouts: 0,
        }
    }

    fn run(mut self) -> Result<(Vec<Tally>, usize)> {
        while !self.limit.exhausted(self.rollouts) {
            if let Some(i) = self.select() {
                let villain = self.candidates[i];
                let outcome = rollout(self.hole, villain, self.board, &mut self.rng)?;
                log::trace!("{} vs {} -> {}", self.hole, villain, outcome);
                self.table[i].update(outcome);
                self.rollouts += 1;
            }
        }
        Ok((self.table, self.rollouts))
    }

    /// Best UCB1 arm among a fresh uniform subset of candidates.
    /// Ties go to whichever came first in the subset.
    fn select(&mut self) -> Option<usize> {
        let n = self.candidates.len();
        let k = self.config.breadth.clamp(1, n);
        let mut best = None;
        let mut high = f64::NEG_INFINITY;
        for i in index::sample(&mut self.rng, n, k).iter() {
            let score = self.table[i].ucb1(self.rollouts, self.config.exploration);
            if best.is_none() || score > high {
                best = Some(i);
                high = score;
            }
        }
        best
    }
}
