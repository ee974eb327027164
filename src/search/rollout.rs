use super::outcome::Outcome;
use crate::Result;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use rand::Rng;

/// Deal the rest of the board at random and play the hand out.
///
/// The unseen cards come from the deck minus both holes and the revealed
/// board, so a rollout never duplicates a card.
pub fn rollout<R: Rng>(hero: Hole, villain: Hole, board: Hand, rng: &mut R) -> Result<Outcome> {
    let holes = Hand::add(Hand::from(hero), Hand::from(villain));
    let known = Hand::add(holes, board);
    let rest = Deck::from(known.complement()).sample(5usize.saturating_sub(board.size()), rng)?;
    Ok(Outcome::showdown(hero, villain, Hand::add(board, rest)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn complete_board_is_deterministic() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hero = Hole::try_from("As Ks").unwrap();
        let villain = Hole::try_from("7s 2h").unwrap();
        let board = Hand::try_from("Qs Js Ts 9s 8s").unwrap();
        for _ in 0..10 {
            assert_eq!(rollout(hero, villain, board, rng).unwrap(), Outcome::Win);
        }
    }

    #[test]
    fn aces_usually_beat_seven_deuce() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hero = Hole::try_from("As Ah").unwrap();
        let villain = Hole::try_from("7c 2d").unwrap();
        let board = Hand::empty();
        let wins = (0..2000)
            .map(|_| rollout(hero, villain, board, rng).unwrap())
            .map(crate::Utility::from)
            .sum::<f64>();
        assert!(wins / 2000.0 > 0.8);
    }
}
