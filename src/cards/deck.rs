use super::card::Card;
use super::hand::Hand;
use crate::Error;
use crate::Result;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards from itself.
/// Random selection via ::draw(), or many at once via ::deal() and ::sample().
/// A Deck is Copy, so sampling from a throwaway copy leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// remove specific cards from the deck
    pub fn remove(&mut self, hand: Hand) {
        self.0 = Hand::from(u64::from(self.0) & !u64::from(hand));
    }

    /// remove a random card from the deck
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card> {
        match self.0.size() {
            0 => Err(Error::InsufficientCards { wanted: 1, left: 0 }),
            n => {
                let mut bits = u64::from(self.0);
                for _ in 0..rng.random_range(0..n) {
                    bits &= bits - 1;
                }
                let card = Card::from(bits);
                self.0.remove(card);
                Ok(card)
            }
        }
    }

    /// remove n random cards from the deck
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Card>> {
        match self.0.size() {
            left if left < n => Err(Error::InsufficientCards { wanted: n, left }),
            _ => (0..n).map(|_| self.draw(rng)).collect(),
        }
    }

    /// n random cards, without removing them from the deck
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Hand> {
        let mut copy = *self;
        copy.deal(n, rng).map(Hand::from_iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn full_deck() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert_eq!(Hand::from(deck).count(), 52);
    }

    #[test]
    fn removed_never_reappear() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let gone = Hand::try_from("As Kd 7h").unwrap();
        let mut deck = Deck::new();
        deck.remove(gone);
        assert_eq!(deck.size(), 49);
        let dealt = deck.deal(49, rng).unwrap();
        assert!(dealt.iter().all(|card| !gone.contains(card)));
        assert_eq!(dealt.iter().copied().collect::<Hand>().size(), 49);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn sample_leaves_pool_unchanged() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::new();
        let hand = deck.sample(5, rng).unwrap();
        assert_eq!(hand.size(), 5);
        assert_eq!(deck, Deck::new());
        assert!(hand.into_iter().all(|card| deck.contains(&card)));
    }

    #[test]
    fn insufficient_cards() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::from(Hand::try_from("As Kd").unwrap());
        assert_eq!(
            deck.sample(3, rng),
            Err(Error::InsufficientCards { wanted: 3, left: 2 })
        );
        assert!(deck.deal(2, rng).is_ok());
        assert!(deck.draw(rng).is_err());
    }

    #[test]
    fn draws_are_uniform_enough() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut counts = [0usize; 52];
        for _ in 0..52_000 {
            let card = Deck::new().draw(rng).unwrap();
            counts[u8::from(card) as usize] += 1;
        }
        assert!(counts.iter().all(|&n| n > 700 && n < 1300));
    }
}
