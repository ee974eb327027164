use super::hand::Hand;

/// Iterates every n-card Hand that avoids a blocked set of cards.
///
/// Walks n-bit combinations of the 52-bit deck in increasing numeric order,
/// one bit-twiddling step per combination (Gosper's hack), skipping any that
/// touch the blocked mask. Nothing is allocated and the order is stable, so
/// the enumeration is reproducible across runs.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// C(52 - blocked, n), the number of Hands this iterator yields from the start.
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next & !Hand::mask() != 0
    }

    /// smallest integer above `next` with the same number of set bits
    fn permute(&self) -> u64 {
        let x = self.next;
        let lowest = x & x.wrapping_neg();
        let ripple = x.wrapping_add(lowest);
        let ones = ((x ^ ripple) >> 2) / lowest;
        ripple | ones
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and blocked cards are decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1u64 << n) - 1,
            mask: u64::from(mask),
        };
        if n > 0 && this.next & this.mask != 0 {
            this.advance();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::from(!0b11111 & Hand::mask())));
        assert_eq!(iter.next(), Some(Hand::from(0b00111)));
        assert_eq!(iter.next(), Some(Hand::from(0b01011)));
        assert_eq!(iter.next(), Some(Hand::from(0b01101)));
        assert_eq!(iter.next(), Some(Hand::from(0b01110)));
        assert_eq!(iter.next(), Some(Hand::from(0b10011)));
        assert_eq!(iter.next(), Some(Hand::from(0b10101)));
        assert_eq!(iter.next(), Some(Hand::from(0b10110)));
        assert_eq!(iter.next(), Some(Hand::from(0b11001)));
        assert_eq!(iter.next(), Some(Hand::from(0b11010)));
        assert_eq!(iter.next(), Some(Hand::from(0b11100)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn blocked_cards_skipped() {
        let mask = Hand::from(0b0110);
        let iter = HandIterator::from((2, mask));
        assert!(iter.take(200).all(|hand| hand.is_disjoint(&mask)));
    }

    #[test]
    fn preflop_pairs() {
        let known = Hand::try_from("As Kd").unwrap();
        let iter = HandIterator::from((2, known));
        assert_eq!(iter.combinations(), 1225);
        let hands = iter.collect::<Vec<Hand>>();
        assert_eq!(hands.len(), 1225);
        assert!(hands.iter().all(|h| h.size() == 2 && h.is_disjoint(&known)));
    }

    #[test]
    fn flop_pairs() {
        let known = Hand::try_from("As Kd 2c 7h Js").unwrap();
        assert_eq!(HandIterator::from((2, known)).count(), 1081);
    }
}
