use crate::Result;
use crate::cards::Board;
use crate::cards::Hole;
use crate::search::Decision;
use crate::search::Search;
use std::collections::VecDeque;

/// Anything that can answer stay-or-fold at a decision point.
pub trait Player {
    fn decide(&mut self, hole: Hole, board: Board) -> Result<Decision>;
}

/// The bandit search, playing for real.
pub struct Robot(Search);

impl From<Search> for Robot {
    fn from(search: Search) -> Self {
        Self(search)
    }
}

impl Player for Robot {
    fn decide(&mut self, hole: Hole, board: Board) -> Result<Decision> {
        self.0.decide(hole, board)
    }
}

/// Plays back fixed answers in order, then stays.
#[derive(Debug, Clone, Default)]
pub struct Script(VecDeque<Decision>);

impl From<Vec<Decision>> for Script {
    fn from(decisions: Vec<Decision>) -> Self {
        Self(decisions.into())
    }
}

impl Player for Script {
    fn decide(&mut self, _: Hole, _: Board) -> Result<Decision> {
        Ok(self.0.pop_front().unwrap_or(Decision::Stay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_runs_out_into_stay() {
        let ref mut script = Script::from(vec![Decision::Fold]);
        let hole = Hole::try_from("As Ks").unwrap();
        assert_eq!(script.decide(hole, Board::empty()).unwrap(), Decision::Fold);
        assert_eq!(script.decide(hole, Board::empty()).unwrap(), Decision::Stay);
    }
}
