use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
/// Being a set, the two orderings of the same pair are the same Hole, which
/// makes it a canonical key for per-opponent statistics.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        let mut hand = self.0;
        let lo = Card::from(u64::from(hand));
        hand.remove(lo);
        let hi = Card::from(u64::from(hand));
        [lo, hi]
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(Error::InvalidInput(format!("hole needs 2 cards, got {}", n))),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(Error::InvalidInput(format!("hole repeats {}", a))),
            false => Ok(Self(Hand::from_iter([a, b]))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s)
            .map_err(Error::Parse)
            .and_then(Self::try_from)
    }
}
