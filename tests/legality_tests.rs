// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use caissa::{is_valid_move, legal_targets, Board, Color, Piece, PieceKind, Square, SQUARES};

#[test]
fn friendly_fire_invariant_over_the_start_position() {
    let board = Board::standard();

    // Any pair of same-colored occupied squares is an illegal move, for
    // every piece kind in the initial layout.
    for &from in SQUARES.iter() {
        for &to in SQUARES.iter() {
            let (src, dst) = match (board.piece_at(from), board.piece_at(to)) {
                (Some(src), Some(dst)) => (src, dst),
                _ => continue,
            };
            if src.color == dst.color {
                assert!(
                    !is_valid_move(&board, from, to),
                    "{} to {} should be friendly fire",
                    from,
                    to
                );
            }
        }
    }
}

#[test]
fn opening_pawn_moves_from_the_start_position() {
    let board = Board::standard();

    // One and two squares forward are open to every white pawn.
    assert!(is_valid_move(&board, Square::E2, Square::E3));
    assert!(is_valid_move(&board, Square::E2, Square::E4));
    // Three squares is not a pawn move, nor is a sideways step.
    assert!(!is_valid_move(&board, Square::E2, Square::E5));
    assert!(!is_valid_move(&board, Square::E2, Square::D2));
    // Nothing to capture on the open diagonal.
    assert!(!is_valid_move(&board, Square::E2, Square::D3));
}

#[test]
fn sliding_pieces_are_boxed_in_at_the_start() {
    let board = Board::standard();
    assert!(legal_targets(&board, Square::A1).is_empty());
    assert!(legal_targets(&board, Square::C1).is_empty());
    assert!(legal_targets(&board, Square::D1).is_empty());
    assert!(legal_targets(&board, Square::E1).is_empty());
}

#[test]
fn rook_stops_at_the_first_obstruction() {
    let mut board = Board::new();
    board
        .add_piece(Square::E4, Piece::new(PieceKind::Rook, Color::White))
        .unwrap();
    board
        .add_piece(Square::C4, Piece::new(PieceKind::Pawn, Color::Black))
        .unwrap();

    assert!(is_valid_move(&board, Square::E4, Square::D4));
    // Capturing the blocker itself is fine.
    assert!(is_valid_move(&board, Square::E4, Square::C4));
    // Sliding through it is not, regardless of what sits beyond.
    assert!(!is_valid_move(&board, Square::E4, Square::B4));
    assert!(!is_valid_move(&board, Square::E4, Square::A4));
}

#[test]
fn bishop_stops_at_the_first_obstruction() {
    let mut board = Board::new();
    board
        .add_piece(Square::A1, Piece::new(PieceKind::Bishop, Color::White))
        .unwrap();
    board
        .add_piece(Square::D4, Piece::new(PieceKind::Knight, Color::White))
        .unwrap();

    assert!(is_valid_move(&board, Square::A1, Square::B2));
    assert!(is_valid_move(&board, Square::A1, Square::C3));
    assert!(!is_valid_move(&board, Square::A1, Square::E5));
    assert!(!is_valid_move(&board, Square::A1, Square::H8));
}

#[test]
fn obstruction_applies_independently_of_destination_occupancy() {
    // A black pawn beyond a white blocker: still unreachable.
    let mut board = Board::new();
    board
        .add_piece(Square::A1, Piece::new(PieceKind::Queen, Color::White))
        .unwrap();
    board
        .add_piece(Square::A3, Piece::new(PieceKind::Pawn, Color::White))
        .unwrap();
    board
        .add_piece(Square::A6, Piece::new(PieceKind::Pawn, Color::Black))
        .unwrap();

    assert!(!is_valid_move(&board, Square::A1, Square::A6));
}

#[test]
fn knight_ignores_every_obstruction() {
    let board = Board::standard();
    // From its home square, over the pawn wall.
    assert!(is_valid_move(&board, Square::B1, Square::A3));
    assert!(is_valid_move(&board, Square::B1, Square::C3));
    // Landing on its own pawns is still forbidden.
    assert!(!is_valid_move(&board, Square::B1, Square::D2));
}

#[test]
fn king_cannot_stray() {
    let mut board = Board::new();
    board
        .add_piece(Square::D4, Piece::new(PieceKind::King, Color::Black))
        .unwrap();

    assert!(is_valid_move(&board, Square::D4, Square::C3));
    assert!(is_valid_move(&board, Square::D4, Square::E5));
    assert!(!is_valid_move(&board, Square::D4, Square::B4));
    assert!(!is_valid_move(&board, Square::D4, Square::F6));
}

#[test]
fn black_pawn_double_step_gating() {
    let board = Board::standard();
    assert!(is_valid_move(&board, Square::D7, Square::D5));

    let mut blocked = Board::standard();
    blocked
        .add_piece(Square::D6, Piece::new(PieceKind::Knight, Color::White))
        .unwrap();
    assert!(!is_valid_move(&blocked, Square::D7, Square::D5));
    assert!(!is_valid_move(&blocked, Square::D7, Square::D6));
}

#[test]
fn legal_targets_match_is_valid_move() {
    let board = Board::standard();
    for &from in SQUARES.iter() {
        let targets = legal_targets(&board, from);
        for &to in SQUARES.iter() {
            assert_eq!(
                targets.contains(&to),
                board.piece_at(from).is_some() && is_valid_move(&board, from, to),
                "{} to {}",
                from,
                to
            );
        }
    }
}
