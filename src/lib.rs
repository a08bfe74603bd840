// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-player chess rules engine. The board owns the 8x8 grid, enforces
//! per-piece movement legality, and applies castling, en passant, and turn
//! alternation; rendering and input decoding live outside the crate and
//! talk to it through `Game`.

#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;

mod board;
mod game;
mod rules;
mod turn;
mod types;

pub use board::{Board, MoveError};
pub use game::Game;
pub use turn::{LastMove, TurnRecord};
pub use types::{squares, File, Piece, PieceKind, Rank, Square, Team};
