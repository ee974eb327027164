use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Knobs for one bandit search.
///
/// Defaults come from the crate-level constants. Every field is optional
/// when deserializing, so a JSON file only names what it overrides:
///
/// ```json
/// { "budget_ms": 500, "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// wall-clock budget per decision, in milliseconds
    pub budget_ms: u64,
    /// candidates scored by UCB1 per selection step
    pub breadth: usize,
    /// UCB1 exploration constant
    pub exploration: Probability,
    /// minimum win rate to stay
    pub threshold: Probability,
    /// fixed seed for reproducible searches
    pub seed: Option<u64>,
    /// rollout threads; 1 keeps everything on the calling thread
    pub workers: usize,
    /// stop after this many rollouts even if time remains
    pub rollouts: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget_ms: crate::SEARCH_BUDGET.as_millis() as u64,
            breadth: crate::SELECTION_BREADTH,
            exploration: crate::EXPLORATION,
            threshold: crate::STAY_THRESHOLD,
            seed: None,
            workers: 1,
            rollouts: None,
        }
    }
}

impl Config {
    /// Defaults, with the budget taken from `BANDIT_DURATION` when it parses.
    pub fn from_env() -> Self {
        match std::env::var(crate::BUDGET_ENV) {
            Ok(value) => Self::default().with_budget_str(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget_ms = budget.as_millis() as u64;
        self
    }
    /// Accepts "500ms", "2s", "1m". Anything else keeps the current budget.
    pub fn with_budget_str(self, value: &str) -> Self {
        match crate::parse_duration(value) {
            Some(budget) => self.with_budget(budget),
            None => {
                log::warn!("ignoring unparseable budget {:?}", value);
                self
            }
        }
    }
    pub fn with_breadth(mut self, breadth: usize) -> Self {
        self.breadth = breadth;
        self
    }
    pub fn with_exploration(mut self, exploration: Probability) -> Self {
        self.exploration = exploration;
        self
    }
    pub fn with_threshold(mut self, threshold: Probability) -> Self {
        self.threshold = threshold;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
    pub fn with_rollouts(mut self, rollouts: usize) -> Self {
        self.rollouts = Some(rollouts);
        self
    }
}
