use crate::Utility;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Strength;
use std::cmp::Ordering;

/// Result of a showdown from the hero's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Tie,
    Win,
}

impl Outcome {
    /// Compare both players' best hands on a complete five-card board.
    pub fn showdown(hero: Hole, villain: Hole, board: Hand) -> Self {
        debug_assert!(board.size() == 5);
        let hero = Strength::from(Hand::add(Hand::from(hero), board));
        let villain = Strength::from(Hand::add(Hand::from(villain), board));
        Self::from(hero.cmp(&villain))
    }
}

/// hero vs villain
impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Win,
            Ordering::Equal => Self::Tie,
            Ordering::Less => Self::Loss,
        }
    }
}

/// terminal payoff: a chop is worth half a win
impl From<Outcome> for Utility {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.5,
            Outcome::Loss => 0.0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Tie => write!(f, "tie"),
            Self::Loss => write!(f, "loss"),
        }
    }
}
