// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented frontend for playing a game in a terminal. All of the
//! chess lives in the library; this module only turns lines of text into
//! clicks and renders the results.

use std::convert::TryFrom;
use std::io::{self, BufRead, Write};

use regex::Regex;

use crate::rules;
use crate::select::{ClickOutcome, Selection};
use crate::session::Session;
use crate::types::{File, Rank, Square, FILES, RANKS};

lazy_static! {
    static ref SQUARE_TOKEN: Regex = Regex::new("^([a-h])([1-8])$").unwrap();
    static ref MOVE_TOKEN: Regex = Regex::new("^([a-h][1-8])-?([a-h][1-8])$").unwrap();
}

/// How pieces are drawn on the board diagram.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlyphSet {
    Unicode,
    Ascii,
}

pub struct Repl {
    session: Session,
    selection: Selection,
    glyphs: GlyphSet,
}

impl Repl {
    pub fn new(glyphs: GlyphSet) -> Repl {
        Repl {
            session: Session::new(),
            selection: Selection::new(),
            glyphs,
        }
    }

    pub fn run<R, W>(mut self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.print_board(&mut writer)?;
        writeln!(writer, "{}", self.session.status())?;
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            let components: Vec<_> = line.split_whitespace().collect();
            match components.split_first().unwrap_or((&"", &[])) {
                (&"", []) => {}
                (&"quit", []) | (&"exit", []) => break,
                (&"board", []) => self.print_board(&mut writer)?,
                (&"moves", []) | (&"history", []) => self.print_history(&mut writer)?,
                (&"targets", &[token]) => self.handle_targets(&mut writer, token)?,
                (&"reset", []) => self.handle_reset(&mut writer)?,
                (&"help", []) => self.print_help(&mut writer)?,
                (&token, []) => self.handle_token(&mut writer, token)?,
                (&first, &[second]) => self.handle_pair(&mut writer, first, second)?,
                _ => writeln!(writer, "unrecognized command (try 'help')")?,
            }
        }

        Ok(())
    }

    fn handle_token<W: Write>(&mut self, w: &mut W, token: &str) -> io::Result<()> {
        if let Some(square) = parse_square(token) {
            return self.handle_click(w, square);
        }

        if let Some(caps) = MOVE_TOKEN.captures(token) {
            if let (Some(from), Some(to)) = (parse_square(&caps[1]), parse_square(&caps[2])) {
                self.handle_click(w, from)?;
                return self.handle_click(w, to);
            }
        }

        writeln!(w, "unrecognized command (try 'help')")
    }

    fn handle_pair<W: Write>(&mut self, w: &mut W, first: &str, second: &str) -> io::Result<()> {
        match (parse_square(first), parse_square(second)) {
            (Some(from), Some(to)) => {
                self.handle_click(w, from)?;
                self.handle_click(w, to)
            }
            _ => writeln!(w, "unrecognized command (try 'help')"),
        }
    }

    fn handle_click<W: Write>(&mut self, w: &mut W, square: Square) -> io::Result<()> {
        match self.selection.click(&mut self.session, square) {
            ClickOutcome::Selected(sq) => {
                let targets = rules::legal_targets(self.session.board(), sq);
                write!(w, "selected {}, can reach:", sq)?;
                for target in &targets {
                    write!(w, " {}", target)?;
                }
                if targets.is_empty() {
                    write!(w, " nothing")?;
                }
                writeln!(w)
            }
            ClickOutcome::Deselected => writeln!(w, "selection cleared"),
            ClickOutcome::Played(entry) => {
                writeln!(w, "{}", entry)?;
                self.print_board(w)?;
                writeln!(w, "{}", self.session.status())
            }
            ClickOutcome::Rejected => writeln!(w, "illegal move"),
            ClickOutcome::Ignored => writeln!(w, "nothing of yours on {}", square),
        }
    }

    fn handle_targets<W: Write>(&mut self, w: &mut W, token: &str) -> io::Result<()> {
        let square = match parse_square(token) {
            Some(square) => square,
            None => return writeln!(w, "targets wants a square, like 'targets e2'"),
        };

        let targets = rules::legal_targets(self.session.board(), square);
        if targets.is_empty() {
            return writeln!(w, "no legal moves from {}", square);
        }

        write!(w, "{} can reach:", square)?;
        for target in &targets {
            write!(w, " {}", target)?;
        }
        writeln!(w)
    }

    fn handle_reset<W: Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.selection.clear();
        self.session.reset();
        self.print_board(w)?;
        writeln!(w, "{}", self.session.status())
    }

    fn print_board<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self.glyphs {
            GlyphSet::Ascii => write!(w, "{}", self.session.board()),
            GlyphSet::Unicode => {
                for &rank in RANKS.iter().rev() {
                    for &file in &FILES {
                        let sq = Square::of(rank, file);
                        match self.session.board().piece_at(sq) {
                            Some(piece) => write!(w, " {} ", piece.glyph())?,
                            None => write!(w, " . ")?,
                        }
                    }
                    writeln!(w, "| {}", rank)?;
                }
                for _ in &FILES {
                    write!(w, "---")?;
                }
                writeln!(w)?;
                for &file in &FILES {
                    write!(w, " {} ", file)?;
                }
                writeln!(w)
            }
        }
    }

    fn print_history<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.session.history().is_empty() {
            return writeln!(w, "no moves yet");
        }

        for (idx, entry) in self.session.history().iter().enumerate() {
            writeln!(w, "{}. {}", idx + 1, entry)?;
        }
        Ok(())
    }

    fn print_help<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "e2          select (or deselect) the piece on e2")?;
        writeln!(w, "e2 e4       move from e2 to e4 (also: e2e4, e2-e4)")?;
        writeln!(w, "board       redraw the board")?;
        writeln!(w, "moves       show the move history")?;
        writeln!(w, "targets e2  list legal moves from e2")?;
        writeln!(w, "reset       start a new game")?;
        writeln!(w, "quit        leave")
    }
}

fn parse_square(token: &str) -> Option<Square> {
    let caps = SQUARE_TOKEN.captures(token)?;
    let file = File::try_from(caps[1].chars().next()?).ok()?;
    let rank = Rank::try_from(caps[2].chars().next()?).ok()?;
    Some(Square::of(rank, file))
}
