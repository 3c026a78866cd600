// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use caissa::{is_valid_move, legal_targets, Board, Color, Piece, PieceKind, Session, Square};
use criterion::black_box;
use criterion::Criterion;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("queen legality d4 to h8 open board", |b| {
        let mut board = Board::new();
        board
            .add_piece(Square::D4, Piece::new(PieceKind::Queen, Color::White))
            .unwrap();
        b.iter(|| is_valid_move(black_box(&board), Square::D4, Square::H8))
    });

    c.bench_function("knight legality b1 to c3 start position", |b| {
        let board = Board::standard();
        b.iter(|| is_valid_move(black_box(&board), Square::B1, Square::C3))
    });

    c.bench_function("legal targets for open queen", |b| {
        let mut board = Board::new();
        board
            .add_piece(Square::D4, Piece::new(PieceKind::Queen, Color::White))
            .unwrap();
        b.iter(|| legal_targets(black_box(&board), Square::D4))
    });

    c.bench_function("session clone", |b| {
        let session = Session::new();
        b.iter(|| black_box(&session).clone())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
