use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oxo::Game;
use oxo_types::Board;

pub fn criterion_benchmark(criterion: &mut Criterion) {
    // Every prefix of a drawn game, so boards at all fill levels get checked.
    let mut game = Game::new();
    for mv in [0, 2, 1, 3, 5, 4, 6, 8, 7] {
        game.select_square(mv);
    }
    let boards: Vec<Board> = game.history().to_vec();

    criterion.bench_function("winner", |b| {
        b.iter(|| {
            for board in black_box(&boards) {
                black_box(board.winner());
            }
        });
    });
    criterion.bench_function("play out", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for mv in black_box([0, 3, 1, 4, 2]) {
                game.select_square(mv);
            }
            black_box(game.status());
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
