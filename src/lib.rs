//! Heads-up Texas Hold'em stay/fold bot.
//!
//! At each decision point the bot estimates its win probability against an
//! unknown opponent by running bandit-guided Monte Carlo rollouts, scoring
//! every completed deal with an exact 7-card hand evaluator.
//!
//! ## Modules
//!
//! - [`cards`]: card encoding, card sets, deck, and the 7-card [`cards::Evaluator`]
//! - [`search`]: the UCB1 rollout engine that answers stay or fold
//! - [`gameplay`]: deals, players, and the preflop → showdown loop
pub mod cards;
pub mod error;
pub mod gameplay;
pub mod search;

pub use error::Error;
pub use error::Result;

use std::time::Duration;

/// Win rates, UCB scores, and decision thresholds.
pub type Probability = f64;
/// Terminal payoff of a single rollout or showdown (1, 0.5, or 0).
pub type Utility = f64;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Wall-clock thinking time per decision point.
pub const SEARCH_BUDGET: Duration = Duration::from_secs(10);
/// Candidate opponent hands scored by UCB1 on each selection step.
/// Keeps selection cheap when the candidate set is large (1225 preflop).
pub const SELECTION_BREADTH: usize = 100;
/// UCB1 exploration constant.
pub const EXPLORATION: Probability = std::f64::consts::SQRT_2;
/// Minimum aggregate win rate required to stay in the hand.
pub const STAY_THRESHOLD: Probability = 0.5;
/// Environment variable overriding [`SEARCH_BUDGET`], e.g. "500ms", "2s", "1m".
pub const BUDGET_ENV: &str = "BANDIT_DURATION";

/// Parse duration string like "250ms", "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit())?;
    let (num, unit) = s.split_at(split);
    let value: u64 = num.parse().ok()?;
    match unit {
        "ms" => Some(Duration::from_millis(value)),
        "s" => Some(Duration::from_secs(value)),
        "m" => value.checked_mul(60).map(Duration::from_secs),
        "h" => value.checked_mul(3600).map(Duration::from_secs),
        _ => None,
    }
}

/// Initialize terminal logging at the given level.
/// Only binaries call this; the library itself just emits through `log`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_with_units() {
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("2s"), Some(Duration::from_secs(2)));
        assert_eq!(parse_duration(" 3m "), Some(Duration::from_secs(180)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn durations_rejected() {
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration("5d"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("9999999999999999999h"), None);
        assert_eq!(parse_duration("99999999999999999999s"), None);
    }
}
