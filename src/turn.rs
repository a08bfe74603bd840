// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::types::{Piece, Square};

/// The single most recent committed move. Written by the board exactly once
/// per accepted move and consumed only by the en passant eligibility check,
/// which needs to know whether the previous move was a double pawn advance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

/// Remembers the previous turn. Empty before the first move of the game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnRecord {
    last: Option<LastMove>,
}

impl TurnRecord {
    pub fn record(&mut self, from: Square, to: Square, piece: Piece) {
        self.last = Some(LastMove { from, to, piece });
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last
    }
}
