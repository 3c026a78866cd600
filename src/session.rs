// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::Board;
use crate::rules;
use crate::types::{Color, PieceKind, Square};

/// Why a proposed move was declined. A declined move is a normal outcome,
/// not an error: the session state is untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reject {
    EmptySource,
    NotYourTurn,
    IllegalMove,
}

/// The result of proposing a move to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; carries the notation entry that was appended
    /// to the history.
    Played(String),
    Rejected(Reject),
}

/// One game of chess: the board, whose turn it is, and the log of moves
/// played so far. Advances by exactly one ply per accepted move.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    to_move: Color,
    history: Vec<String>,
}

impl Session {
    /// A fresh game: standard starting position, white to move, no moves
    /// played.
    pub fn new() -> Session {
        Session {
            board: Board::standard(),
            to_move: Color::White,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn status(&self) -> String {
        match self.to_move {
            Color::White => "White to move".to_owned(),
            Color::Black => "Black to move".to_owned(),
        }
    }

    /// Proposes the move `from` -> `to` for the side to move. On success
    /// the board advances, the move is appended to the history, and the
    /// turn flips. On rejection nothing changes.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => {
                debug!("rejecting {} to {}: nothing on {}", from, to, from);
                return MoveOutcome::Rejected(Reject::EmptySource);
            }
        };

        if piece.color != self.to_move {
            debug!(
                "rejecting {} to {}: it is not {}'s turn",
                from,
                to,
                piece.color.name()
            );
            return MoveOutcome::Rejected(Reject::NotYourTurn);
        }

        if !rules::is_valid_move(&self.board, from, to) {
            debug!(
                "rejecting {} to {}: no legal {} move",
                from,
                to,
                piece.kind.name()
            );
            return MoveOutcome::Rejected(Reject::IllegalMove);
        }

        // Read the capture before the board changes underneath it.
        let captured = self.board.piece_at(to).map(|victim| victim.kind);
        self.board.move_piece(from, to);
        let entry = notation(piece.kind, from, to, captured);
        info!("{} plays: {}", piece.color.name(), entry);
        self.history.push(entry.clone());
        self.to_move = self.to_move.toggle();
        MoveOutcome::Played(entry)
    }

    /// Starts over: standard layout, white to move, history cleared. The
    /// result is indistinguishable from a brand-new session.
    pub fn reset(&mut self) {
        info!("resetting to the starting position");
        self.board = Board::standard();
        self.to_move = Color::White;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

fn notation(kind: PieceKind, from: Square, to: Square, captured: Option<PieceKind>) -> String {
    let mut entry = format!("{} {} to {}", kind.name(), from, to);
    if let Some(victim) = captured {
        entry.push_str(" captures ");
        entry.push_str(victim.name());
    }
    entry
}
