// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// The terminal frontend. All chess knowledge lives in the library; this
// binary only decodes typed moves into cell pairs, hands them to the game
// session, and redraws the board from the read-only queries.

#[macro_use]
extern crate clap;

use std::convert::TryFrom;
use std::io::{self, BufRead, Write};

use clap::{App, Arg};
use gambit::{File, Game, Rank, Square};

const LIGHT: &str = "\x1b[30;107m";
const DARK: &str = "\x1b[30;47m";
const RESET: &str = "\x1b[0m";

/// Decodes a move typed as source square then destination square, like
/// "e2e4" or "e2 e4". Castling is entered as the king's square followed by
/// the rook's square.
fn parse_move(input: &str) -> Option<(Square, Square)> {
    let chrs: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if chrs.len() != 4 {
        return None;
    }

    let from = Square::of(
        Rank::try_from(chrs[1]).ok()?,
        File::try_from(chrs[0]).ok()?,
    );
    let to = Square::of(
        Rank::try_from(chrs[3]).ok()?,
        File::try_from(chrs[2]).ok()?,
    );
    Some((from, to))
}

fn draw(game: &Game, plain: bool, flip: bool) {
    if plain {
        println!("{}", game.board());
        return;
    }

    let rows: Vec<i32> = if flip { (0..8).rev().collect() } else { (0..8).collect() };
    for &y in &rows {
        for x in 0..8 {
            let x = if flip { 7 - x } else { x };
            let background = if (x + y) % 2 == 0 { LIGHT } else { DARK };
            let letter = match game.piece_at(x, y) {
                Some(piece) => piece.to_string(),
                None => " ".to_string(),
            };
            print!("{}{} {}", background, letter, RESET);
        }
        println!(" {}", 8 - y);
    }

    let files = if flip { "h g f e d c b a" } else { "a b c d e f g h" };
    println!("{}", files);
}

fn main() -> io::Result<()> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("Two-player chess in the terminal. Type moves like e2e4; castle by moving your king onto your own rook. q quits.")
        .arg(
            Arg::with_name("plain")
                .long("--plain")
                .help("Draw the board without ANSI colors"),
        )
        .arg(
            Arg::with_name("flip")
                .long("--flip")
                .help("Draw the board from Black's side"),
        )
        .get_matches();

    let plain = matches.is_present("plain");
    let flip = matches.is_present("flip");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    loop {
        draw(&game, plain, flip);
        print!("{}> ", game.side_to_move());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line == "q" || line == "quit" {
            break;
        }

        match parse_move(line) {
            Some((from, to)) => {
                if let Err(reason) = game.try_move(from, to) {
                    println!("illegal move: {}", reason);
                }
            }
            None => println!("moves look like e2e4 (q to quit)"),
        }
    }

    Ok(())
}
