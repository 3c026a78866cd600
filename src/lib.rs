// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod board;
mod repl;
mod rules;
mod select;
mod session;
mod types;

pub use board::{Board, PlacementError};
pub use repl::{GlyphSet, Repl};
pub use rules::{is_valid_move, legal_targets, TargetVec};
pub use select::{ClickOutcome, Selection};
pub use session::{MoveOutcome, Reject, Session};
pub use types::{Color, File, Piece, PieceKind, Rank, Square};
pub use types::{COLORS, FILES, PIECE_KINDS, RANKS, SQUARES};
