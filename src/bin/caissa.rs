// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io::{self, Write};
use std::process;

use caissa::{GlyphSet, Repl};
use clap::{App, Arg, SubCommand};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("ascii")
                .help("Draw pieces as letters instead of Unicode figurines")
                .long("--ascii"),
        )
        .subcommand(
            SubCommand::with_name("demo").about("Replay a short scripted opening and exit"),
        )
        .get_matches();

    let glyphs = if matches.is_present("ascii") {
        GlyphSet::Ascii
    } else {
        GlyphSet::Unicode
    };

    if matches.subcommand_matches("demo").is_some() {
        run_demo(glyphs);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let repl = Repl::new(glyphs);
    repl.run(stdin.lock(), stdout.lock()).unwrap()
}

fn run_demo(glyphs: GlyphSet) -> ! {
    // The first few moves of a Ruy Lopez, fed through the same loop an
    // interactive game uses.
    let script = "e2 e4\ne7 e5\ng1 f3\nb8 c6\nf1 b5\nmoves\nquit\n";
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let repl = Repl::new(glyphs);
    repl.run(script.as_bytes(), &mut handle).unwrap();
    handle.flush().unwrap();
    process::exit(0);
}
