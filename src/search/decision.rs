use crate::Probability;

/// The only question the bot ever answers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Decision {
    Stay,
    Fold,
}

impl Decision {
    /// Stay when the estimated win rate reaches the threshold.
    pub fn from_win_rate(rate: Probability, threshold: Probability) -> Self {
        match rate >= threshold {
            true => Self::Stay,
            false => Self::Fold,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Fold => write!(f, "fold"),
        }
    }
}
