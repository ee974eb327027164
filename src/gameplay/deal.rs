use crate::Error;
use crate::Result;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use rand::Rng;

/// Every card of one hand, fixed before the first decision.
///
/// The board is kept in dealing order so that the flop is always its
/// first three cards, the turn the fourth, and the river the fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    hero: Hole,
    villain: Hole,
    board: [Card; 5],
}

impl Deal {
    /// Validated deal from explicit cards.
    pub fn new(hero: Hole, villain: Hole, board: [Card; 5]) -> Result<Self> {
        let mine = Hand::from(hero);
        let theirs = Hand::from(villain);
        let shared = board.iter().copied().collect::<Hand>();
        if shared.size() != 5 {
            return Err(Error::InvalidInput(format!("board repeats a card: {}", shared)));
        }
        if !mine.is_disjoint(&theirs) || !shared.is_disjoint(&Hand::add(mine, theirs)) {
            return Err(Error::InvalidInput(format!(
                "cards dealt twice: {} / {} / {}",
                hero, villain, shared
            )));
        }
        Ok(Self {
            hero,
            villain,
            board,
        })
    }

    /// Shuffle up: hero's hole, then the board, then the villain's hole.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self> {
        let ref mut deck = Deck::new();
        let hero = Hole::try_from(Hand::from_iter(deck.deal(2, rng)?))?;
        let board = deck.deal(5, rng)?;
        let villain = Hole::try_from(Hand::from_iter(deck.deal(2, rng)?))?;
        let board = [board[0], board[1], board[2], board[3], board[4]];
        Self::new(hero, villain, board)
    }

    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn villain(&self) -> Hole {
        self.villain
    }
    /// the community cards visible on a street
    pub fn board(&self, street: Street) -> Result<Board> {
        Board::try_from(self.revealed(street))
    }
    fn revealed(&self, street: Street) -> Hand {
        self.board
            .iter()
            .take(street.n_observed())
            .copied()
            .collect::<Hand>()
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let board = self
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "hero {} | villain {} | board {}", self.hero, self.villain, board)
    }
}
