// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::{Board, MoveError};
use crate::types::{Piece, Square, Team};

/// A game session: the board plus whose turn it is. The frontend drives it
/// through `attempt_move` with the two cells the player selected and reads
/// board state back through the query methods. White moves first, and the
/// turn changes hands only when a move is committed.
pub struct Game {
    board: Board,
    to_move: Team,
}

impl Game {
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            to_move: Team::White,
        }
    }

    pub fn side_to_move(&self) -> Team {
        self.to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The boolean move surface over raw grid coordinates, for callers that
    /// decode input gestures into cell pairs. Out-of-range coordinates are
    /// just another rejected move.
    pub fn attempt_move(&mut self, src_x: i32, src_y: i32, dest_x: i32, dest_y: i32) -> bool {
        self.try_move_grid(src_x, src_y, dest_x, dest_y).is_ok()
    }

    /// Like `attempt_move`, but reports why a move was rejected.
    pub fn try_move_grid(
        &mut self,
        src_x: i32,
        src_y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> Result<(), MoveError> {
        let from = Square::from_grid(src_x, src_y).ok_or(MoveError::OutOfBounds)?;
        let to = Square::from_grid(dest_x, dest_y).ok_or(MoveError::OutOfBounds)?;
        self.try_move(from, to)
    }

    /// Typed variant of the move surface for callers that already hold
    /// squares.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        self.board.try_move(self.to_move, from, to)?;
        self.to_move = self.to_move.toggle();
        Ok(())
    }

    /// Render query: is the cell at these grid coordinates empty? Cells off
    /// the board count as empty.
    pub fn is_cell_empty(&self, x: i32, y: i32) -> bool {
        self.piece_at(x, y).is_none()
    }

    /// Render query: the piece at these grid coordinates, if any.
    pub fn piece_at(&self, x: i32, y: i32) -> Option<Piece> {
        Square::from_grid(x, y).and_then(|sq| self.board.piece_at(sq))
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
