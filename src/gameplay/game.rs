use super::deal::Deal;
use super::player::Player;
use crate::Result;
use crate::Utility;
use crate::cards::Hand;
use crate::cards::Street;
use crate::cards::Strength;
use crate::search::Decision;
use crate::search::Outcome;

/// How a hand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Folded(Street),
    Showdown {
        outcome: Outcome,
        hero: Strength,
        villain: Strength,
    },
}

impl Ending {
    /// -1 for a fold, otherwise the showdown payoff
    pub fn score(&self) -> Utility {
        match self {
            Self::Folded(_) => -1.0,
            Self::Showdown { outcome, .. } => Utility::from(*outcome),
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Folded(street) => write!(f, "folded on the {}", street),
            Self::Showdown {
                outcome,
                hero,
                villain,
            } => write!(f, "{} at showdown: {} vs {}", outcome, hero, villain),
        }
    }
}

/// One heads-up hand from the hero's seat.
///
/// The villain never acts; the hero decides on the preflop, flop, and turn,
/// and if they never fold the hand goes to showdown on the river.
#[derive(Debug, Clone, Copy)]
pub struct Game(Deal);

impl From<Deal> for Game {
    fn from(deal: Deal) -> Self {
        Self(deal)
    }
}

impl Game {
    pub fn deal(&self) -> &Deal {
        &self.0
    }

    pub fn play<P>(&self, player: &mut P) -> Result<Ending>
    where
        P: Player + ?Sized,
    {
        let hole = self.0.hero();
        for street in Street::decisions().iter().copied() {
            let board = self.0.board(street)?;
            match player.decide(hole, board)? {
                Decision::Fold => {
                    log::info!("{:<7} {} | {} | fold", street, hole, board);
                    return Ok(Ending::Folded(street));
                }
                Decision::Stay => log::info!("{:<7} {} | {} | stay", street, hole, board),
            }
        }
        self.showdown()
    }

    fn showdown(&self) -> Result<Ending> {
        let board = Hand::from(self.0.board(Street::Rive)?);
        let hero = self.0.hero();
        let villain = self.0.villain();
        let ending = Ending::Showdown {
            outcome: Outcome::showdown(hero, villain, board),
            hero: Strength::from(Hand::add(Hand::from(hero), board)),
            villain: Strength::from(Hand::add(Hand::from(villain), board)),
        };
        log::info!("showdown {} vs {} | {}", hero, villain, ending);
        Ok(ending)
    }
}
