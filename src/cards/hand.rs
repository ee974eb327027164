use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of Cards stored as a 52-bit string.
///
/// Bit `n` is set when the card with index `n` is present. Because cards are
/// laid out suit by suit, the bitstring reads as four 13-bit rank lanes
/// (♣ lowest, ♠ highest). Set algebra is a handful of bitwise ops and a Hand
/// is `Copy`, so callers freely pass it around by value.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// Union of two disjoint Hands.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.is_disjoint(&rhs));
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// The cards of a single suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// How many cards of the given Rank are held, across all suits.
    pub fn copies(&self, rank: &Rank) -> usize {
        (self.0 & u64::from(*rank)).count_ones() as usize
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::from(bits);
                self.remove(card);
                Some(card)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [2♣, T♠, J♣, J♠]
/// xxxxxxxxxxxx 0001000000000000000000000000000000000010000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// fold the four suit lanes on top of each other
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let lane = Rank::mask() as u64;
        let x = h.0;
        ((x | x >> 13 | x >> 26 | x >> 39) & lane) as u16
    }
}

/// str isomorphism
/// rejects repeated cards, since a Hand cannot hold the same card twice
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = cards.iter().copied().collect::<Self>();
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(format!("repeated card in {:?}", s)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(*self)
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
