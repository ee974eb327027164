use super::outcome::Outcome;
use crate::Probability;
use crate::Utility;

/// Running statistics for one candidate opponent hand.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Tally {
    wins: Utility,
    visits: usize,
}

impl Tally {
    pub fn wins(&self) -> Utility {
        self.wins
    }
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn update(&mut self, outcome: Outcome) {
        self.wins += Utility::from(outcome);
        self.visits += 1;
    }
    pub fn merge(&mut self, other: &Self) {
        self.wins += other.wins;
        self.visits += other.visits;
    }
    pub fn win_rate(&self) -> Probability {
        match self.visits {
            0 => 0.0,
            n => self.wins / n as Probability,
        }
    }
    /// UCB1 score given `total` rollouts so far.
    /// Unvisited candidates are always tried first.
    pub fn ucb1(&self, total: usize, exploration: Probability) -> Probability {
        match self.visits {
            0 => Probability::INFINITY,
            n => {
                let n = n as Probability;
                let t = (total as Probability + 1.0).ln();
                self.win_rate() + exploration * (t / n).sqrt()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvisited_is_infinite() {
        assert_eq!(Tally::default().ucb1(100, crate::EXPLORATION), f64::INFINITY);
        assert_eq!(Tally::default().win_rate(), 0.0);
    }

    #[test]
    fn ucb1_formula() {
        let mut tally = Tally::default();
        tally.update(Outcome::Win);
        tally.update(Outcome::Tie);
        tally.update(Outcome::Loss);
        tally.update(Outcome::Win);
        assert_eq!(tally.visits(), 4);
        assert_eq!(tally.win_rate(), 0.625);
        let expected = 0.625 + 2f64.sqrt() * (11f64.ln() / 4.0).sqrt();
        assert!((tally.ucb1(10, crate::EXPLORATION) - expected).abs() < 1e-12);
    }

    #[test]
    fn exploration_shrinks_with_visits() {
        let mut few = Tally::default();
        let mut many = Tally::default();
        few.update(Outcome::Win);
        (0..16).for_each(|_| many.update(Outcome::Win));
        assert!(few.ucb1(50, 1.0) > many.ucb1(50, 1.0));
        assert_eq!(few.ucb1(50, 0.0), many.ucb1(50, 0.0));
    }

    #[test]
    fn merging() {
        let mut a = Tally::default();
        let mut b = Tally::default();
        a.update(Outcome::Win);
        b.update(Outcome::Tie);
        b.update(Outcome::Loss);
        a.merge(&b);
        assert_eq!(a.visits(), 3);
        assert_eq!(a.wins(), 1.5);
    }
}
