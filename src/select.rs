// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Click-to-move selection handling.
//!
//! The selection is presentation state, held apart from the session so the
//! engine itself never needs to know that a square is "selected". A
//! frontend feeds clicks in and re-renders from the outcome.

use crate::session::{MoveOutcome, Session};
use crate::types::Square;

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected(Square),
    /// The selected square was clicked again; selection cleared.
    Deselected,
    /// The selected piece moved; carries the notation entry.
    Played(String),
    /// The proposed move was illegal. The selection is cleared and the
    /// session is untouched.
    Rejected,
    /// Click on an empty or opposing square with nothing selected.
    Ignored,
}

/// At most one square selected at a time.
#[derive(Copy, Clone, Debug, Default)]
pub struct Selection {
    current: Option<Square>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection { current: None }
    }

    pub fn selected(&self) -> Option<Square> {
        self.current
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Feeds one click into the selection machine, possibly advancing the
    /// session by a move. Total: every click maps to an outcome.
    pub fn click(&mut self, session: &mut Session, square: Square) -> ClickOutcome {
        let selected = match self.current {
            None => {
                return match session.board().piece_at(square) {
                    Some(piece) if piece.color == session.to_move() => {
                        debug!("selected {} {} on {}", piece.color.name(), piece.kind.name(), square);
                        self.current = Some(square);
                        ClickOutcome::Selected(square)
                    }
                    _ => ClickOutcome::Ignored,
                };
            }
            Some(selected) => selected,
        };

        // Any click while a piece is selected consumes the selection.
        self.current = None;
        if selected == square {
            return ClickOutcome::Deselected;
        }

        match session.try_move(selected, square) {
            MoveOutcome::Played(entry) => ClickOutcome::Played(entry),
            MoveOutcome::Rejected(_) => ClickOutcome::Rejected,
        }
    }
}
