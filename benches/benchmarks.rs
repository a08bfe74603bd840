// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use gambit::{Board, Game, Square, Team};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("opening pawn push", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.attempt_move(black_box(4), 6, 4, 4)
        })
    });

    c.bench_function("rejected slide through blocker", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.try_move(Team::White, black_box(Square::D1), Square::D5)
        })
    });

    c.bench_function("attack scan of e8 from start", |b| {
        let board = Board::new();
        b.iter(|| board.is_square_attacked(black_box(Team::White), Square::E8))
    });

    c.bench_function("board clone", |b| {
        let board = Board::new();
        b.iter(|| black_box(&board).clone())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
