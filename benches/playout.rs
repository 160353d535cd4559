//! Full-game throughput: deal plus greedy self-play to completion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crazy_eights::core::{EngineConfig, GameRng, Status};
use crazy_eights::policy::{GreedyOpponent, OpponentPolicy};
use crazy_eights::rules::TurnEngine;

fn greedy_playout(seed: u64) -> usize {
    let mut engine = TurnEngine::new(EngineConfig::new().with_seed(seed));
    let mut rng = GameRng::new(seed);
    let mut state = engine.start();
    let mut moves = 0;
    while state.status == Status::Playing && moves < 500 {
        let player = state.current_turn;
        match GreedyOpponent.choose_action(&engine, &state, player, &mut rng) {
            Some(action) => state = engine.apply(&state, player, &action),
            None => break,
        }
        moves += 1;
    }
    moves
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("deal", |b| {
        let mut engine = TurnEngine::new(EngineConfig::new().with_seed(1));
        b.iter(|| black_box(engine.start()));
    });

    c.bench_function("greedy_playout", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(greedy_playout(seed))
        });
    });
}

criterion_group!(benches, bench_playout);
criterion_main!(benches);
