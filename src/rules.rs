// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-piece movement geometry and the legality dispatch built on it.
//!
//! These rules are deliberately reduced: no check or checkmate, no
//! castling, no en passant, no promotion. A move is legal exactly when it
//! does not land on a friendly piece and matches the moving piece's
//! geometry, with sliding pieces blocked by anything in between.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::TableIndex;
use crate::types::{Color, File, Piece, PieceKind, Rank, Square, SQUARES};

/// Destination squares reachable from a single origin. A queen in the
/// middle of an open board tops out at 27.
pub type TargetVec = ArrayVec<[Square; 32]>;

/// Decides whether moving the piece on `from` to `to` is legal.
///
/// Callers are expected to only ask about occupied source squares; an
/// empty source has no legal moves and is reported as such.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => {
            warn!("legality query against empty source square {}", from);
            return false;
        }
    };

    // No piece may land on a friendly piece, no matter its kind.
    if let Some(occupant) = board.piece_at(to) {
        if occupant.color == piece.color {
            return false;
        }
    }

    reaches(piece, board, from, to)
}

/// Every legal destination for the piece on `from`. Empty squares yield an
/// empty vector. Backs legal-move highlighting in frontends.
pub fn legal_targets(board: &Board, from: Square) -> TargetVec {
    let mut targets = TargetVec::new();
    if board.piece_at(from).is_none() {
        return targets;
    }

    for &to in SQUARES.iter() {
        if is_valid_move(board, from, to) {
            targets.push(to);
        }
    }
    targets
}

fn reaches(piece: Piece, board: &Board, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece.color, from, to),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Queen => queen_reaches(board, from, to),
        PieceKind::King => king_reaches(from, to),
    }
}

fn rank_of(sq: Square) -> i32 {
    sq.rank().as_index() as i32
}

fn file_of(sq: Square) -> i32 {
    sq.file().as_index() as i32
}

fn square_at(rank: i32, file: i32) -> Square {
    debug_assert!((0..8).contains(&rank) && (0..8).contains(&file));
    Square::of(Rank::from_index(rank as usize), File::from_index(file as usize))
}

/// True when every square strictly between `from` and `to` is empty, where
/// the two squares share a rank, a file, or a diagonal. Walks exactly one
/// square short of the destination; the destination itself is the
/// friendly-fire guard's business.
fn clear_line(board: &Board, from: Square, to: Square) -> bool {
    let rank_step = (rank_of(to) - rank_of(from)).signum();
    let file_step = (file_of(to) - file_of(from)).signum();
    let distance = (rank_of(to) - rank_of(from))
        .abs()
        .max((file_of(to) - file_of(from)).abs());

    for i in 1..distance {
        let between = square_at(rank_of(from) + i * rank_step, file_of(from) + i * file_step);
        if board.piece_at(between).is_some() {
            return false;
        }
    }
    true
}

fn pawn_reaches(board: &Board, color: Color, from: Square, to: Square) -> bool {
    // White pawns walk up the ranks, black pawns walk down.
    let (direction, start_rank, jump_rank) = match color {
        Color::White => (1, Rank::Two, Rank::Four),
        Color::Black => (-1, Rank::Seven, Rank::Five),
    };
    let rank_delta = rank_of(to) - rank_of(from);
    let file_delta = file_of(to) - file_of(from);

    // Single step forward onto an empty square.
    if file_delta == 0 && rank_delta == direction && board.piece_at(to).is_none() {
        return true;
    }

    // Double step off the starting rank, with both squares in front clear.
    if file_delta == 0 && from.rank() == start_rank && to.rank() == jump_rank {
        let stepped_over = square_at(rank_of(from) + direction, file_of(from));
        if board.piece_at(stepped_over).is_none() && board.piece_at(to).is_none() {
            return true;
        }
    }

    // One-step diagonal capture onto an enemy piece.
    if file_delta.abs() == 1 && rank_delta == direction {
        if let Some(occupant) = board.piece_at(to) {
            return occupant.color != color;
        }
    }

    false
}

fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    if rank_of(from) != rank_of(to) && file_of(from) != file_of(to) {
        return false;
    }
    clear_line(board, from, to)
}

fn knight_reaches(from: Square, to: Square) -> bool {
    // Knights jump; nothing on the board can block them.
    let rank_delta = (rank_of(to) - rank_of(from)).abs();
    let file_delta = (file_of(to) - file_of(from)).abs();
    (rank_delta == 2 && file_delta == 1) || (rank_delta == 1 && file_delta == 2)
}

fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let rank_delta = (rank_of(to) - rank_of(from)).abs();
    let file_delta = (file_of(to) - file_of(from)).abs();
    if rank_delta != file_delta || rank_delta == 0 {
        return false;
    }
    clear_line(board, from, to)
}

fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    rook_reaches(board, from, to) || bishop_reaches(board, from, to)
}

fn king_reaches(from: Square, to: Square) -> bool {
    (rank_of(to) - rank_of(from)).abs() <= 1 && (file_of(to) - file_of(from)).abs() <= 1
}
