use banditpoker::Error;
use banditpoker::cards::*;
use banditpoker::gameplay::*;
use banditpoker::search::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

fn cards(ids: &[u8]) -> Vec<Card> {
    ids.iter().map(|&id| Card::try_from(id).unwrap()).collect()
}

fn hole(ids: [u8; 2]) -> Hole {
    Hole::try_from((Card::try_from(ids[0]).unwrap(), Card::try_from(ids[1]).unwrap())).unwrap()
}

fn deal(hero: [u8; 2], board: [u8; 5], villain: [u8; 2]) -> Deal {
    let board = board.map(|id| Card::try_from(id).unwrap());
    Deal::new(hole(hero), hole(villain), board).unwrap()
}

#[test]
fn royal_flush_wins_at_showdown() {
    let board = Hand::from_iter(cards(&[49, 48, 47, 46, 45]));
    assert_eq!(Outcome::showdown(hole([51, 50]), hole([44, 27]), board), Outcome::Win);
    let ending = Game::from(deal([51, 50], [49, 48, 47, 46, 45], [44, 27]))
        .play(&mut Script::default())
        .unwrap();
    assert_eq!(ending.score(), 1.0);
}

#[test]
fn shared_straight_flush_chops() {
    let ending = Game::from(deal([51, 24], [49, 48, 47, 46, 45], [44, 27]))
        .play(&mut Script::default())
        .unwrap();
    assert_eq!(ending.score(), 0.5);
}

#[test]
fn bigger_quads_win() {
    let ending = Game::from(deal([28, 41], [31, 44, 11, 15, 2], [5, 18]))
        .play(&mut Script::default())
        .unwrap();
    assert_eq!(ending.score(), 0.0);
}

#[test]
fn literal_evaluations() {
    let royal = evaluate(&cards(&[47, 48, 49, 50, 51, 13, 0])).unwrap();
    assert_eq!(royal.category(), 9);
    assert_eq!(royal.tiebreak(), vec![Rank::Ace]);
    let straight_flush = evaluate(&cards(&[20, 21, 22, 23, 24, 39, 1])).unwrap();
    assert_eq!(straight_flush.category(), 8);
    assert_eq!(straight_flush.tiebreak(), vec![Rank::King]);
    let wheel = evaluate(&cards(&[12, 13, 1, 41, 42, 24, 10])).unwrap();
    assert_eq!(wheel.category(), 4);
    assert_eq!(wheel.tiebreak(), vec![Rank::Five]);
    let quads = evaluate(&cards(&[7, 20, 33, 46, 24, 39, 1])).unwrap();
    assert_eq!(quads.category(), 7);
    assert_eq!(quads.tiebreak(), vec![Rank::Nine, Rank::King]);
    assert!(royal > quads);
}

#[test]
fn evaluator_rejects_bad_input() {
    assert!(matches!(evaluate(&cards(&[0, 1, 2, 3, 4, 5])), Err(Error::InvalidInput(_))));
    assert!(matches!(evaluate(&cards(&[0, 1, 2, 3, 4, 5, 5])), Err(Error::InvalidInput(_))));
}

#[test]
fn robot_folds_without_time_to_think() {
    let search = Search::new(Config::default().with_budget(Duration::ZERO));
    let ending = Game::from(deal([51, 50], [49, 48, 47, 46, 45], [44, 27]))
        .play(&mut Robot::from(search))
        .unwrap();
    assert_eq!(ending, Ending::Folded(Street::Pref));
}

#[test]
fn robot_plays_random_hands() {
    let ref mut rng = SmallRng::seed_from_u64(2024);
    let config = Config::default()
        .with_budget(Duration::from_secs(60))
        .with_rollouts(200)
        .with_seed(2024);
    let mut robot = Robot::from(Search::new(config));
    for _ in 0..5 {
        let ending = Game::from(Deal::random(rng).unwrap()).play(&mut robot).unwrap();
        assert!([-1.0, 0.0, 0.5, 1.0].contains(&ending.score()));
    }
}

#[test]
fn seeded_decisions_repeat() {
    let config = Config::default()
        .with_budget(Duration::from_secs(60))
        .with_rollouts(400)
        .with_seed(99);
    let hole = hole([51, 38]);
    let board = Board::try_from(cards(&[0, 14, 28]).as_slice()).unwrap();
    let a = Search::new(config.clone()).estimate(hole, board).unwrap();
    let b = Search::new(config).estimate(hole, board).unwrap();
    assert_eq!(a.tallies(), b.tallies());
    assert_eq!(a.rollouts(), 400);
}
