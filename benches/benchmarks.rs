criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        sampling_river_rollout,
        enumerating_flop_candidates,
        deciding_flop_capped,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::new().sample(7, rng).unwrap();
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn sampling_river_rollout(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hero = Hole::try_from("As Kd").unwrap();
    let villain = Hole::try_from("7c 7h").unwrap();
    let board = Hand::try_from("2c Jd 9s").unwrap();
    c.bench_function("roll out a Flop to showdown", |b| {
        b.iter(|| rollout(hero, villain, board, rng).unwrap())
    });
}

fn enumerating_flop_candidates(c: &mut criterion::Criterion) {
    let known = Hand::try_from("As Kd 2c Jd 9s").unwrap();
    c.bench_function("enumerate all Flop opponent Holes", |b| {
        b.iter(|| HandIterator::from((2, known)).count())
    });
}

fn deciding_flop_capped(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("As Kd").unwrap();
    let board = Board::try_from("2c Jd 9s").unwrap();
    let config = Config::default()
        .with_budget(std::time::Duration::from_secs(60))
        .with_rollouts(1_000)
        .with_seed(0);
    c.bench_function("decide a Flop in 1000 rollouts", |b| {
        b.iter(|| Search::new(config.clone()).decide(hole, board).unwrap())
    });
}

use banditpoker::cards::*;
use banditpoker::search::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
