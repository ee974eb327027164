use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// The community cards visible to both players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        match self.0.size() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
}

/// Hand -> Board only admits 0, 3, 4, 5 cards
impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Street::try_from(hand.size()).map(|_| Self(hand))
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let hand = cards.iter().copied().collect::<Hand>();
        match hand.size() == cards.len() {
            true => Self::try_from(hand),
            false => Err(Error::InvalidInput("board repeats a card".into())),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s)
            .map_err(Error::Parse)
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0.size() {
            0 => write!(f, "--"),
            _ => write!(f, "{}", self.0),
        }
    }
}
