// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-piece movement legality.
//!
//! Every rule here is a pure function over the piece, the proposed move, the
//! board, and the previous turn. A legal move yields a `MoveEffects` value
//! describing anything the board must do beyond the ordinary
//! clear-source/overwrite-destination commit; the rules themselves never
//! mutate anything, so a rejected attempt cannot leave a half-applied move
//! behind. The caller guarantees that the piece really sits on `from`.

use crate::board::{Board, MoveError};
use crate::turn::TurnRecord;
use crate::types::{File, Piece, PieceKind, Rank, Square, TableIndex};

/// Side effects of a legal move, applied by the board only once the whole
/// attempt is accepted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveEffects {
    /// A square cleared in addition to the destination overwrite. Only en
    /// passant sets this: the captured pawn does not sit on the destination
    /// square.
    pub extra_capture: Option<Square>,
}

/// Decides whether `piece` may move from `from` to `to`.
pub fn evaluate(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    last_turn: &TurnRecord,
) -> Result<MoveEffects, MoveError> {
    let result = match piece.kind {
        PieceKind::Pawn => pawn(piece, from, to, board, last_turn),
        PieceKind::Knight => knight(piece, from, to, board),
        PieceKind::Bishop => bishop(piece, from, to, board),
        PieceKind::Rook => rook(piece, from, to, board),
        PieceKind::Queen => queen(piece, from, to, board),
        PieceKind::King => king(piece, from, to, board),
    };

    if let Err(reason) = result {
        trace!(
            "{} {:?} {} to {}: rejected ({})",
            piece.team,
            piece.kind,
            from,
            to,
            reason
        );
    }
    result
}

fn file_of(sq: Square) -> i32 {
    sq.file().as_index() as i32
}

fn rank_of(sq: Square) -> i32 {
    sq.rank().as_index() as i32
}

/// Rejects moves onto a square held by a piece of the mover's own team.
/// Note that a piece's current square is friendly to itself, so zero-delta
/// "moves" die here even for kinds whose shape check would accept them.
fn ensure_destination(piece: Piece, target: Option<Piece>) -> Result<(), MoveError> {
    match target {
        Some(occupant) if occupant.team == piece.team => Err(MoveError::FriendlyDestination),
        _ => Ok(()),
    }
}

/// Walks the squares strictly between `from` and `to` along a rank, file,
/// or diagonal. The caller has already validated the shape, so the step
/// direction is derived from the signs of the deltas. The board's castling
/// check shares this walk for the stretch between king and rook.
pub(crate) fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let df = (file_of(to) - file_of(from)).signum();
    let dr = (rank_of(to) - rank_of(from)).signum();
    let distance = (file_of(to) - file_of(from))
        .abs()
        .max((rank_of(to) - rank_of(from)).abs());

    for i in 1..distance {
        let sq = Square::of(
            Rank::from_index((rank_of(from) + dr * i) as usize),
            File::from_index((file_of(from) + df * i) as usize),
        );
        if !board.is_empty(sq) {
            return false;
        }
    }

    true
}

fn pawn(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    last_turn: &TurnRecord,
) -> Result<MoveEffects, MoveError> {
    let dir = piece.team.pawn_direction();
    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);

    if let Some(target) = board.piece_at(to) {
        // Occupied destination: the only legal pawn move is a one-square
        // diagonal capture of the opposing team.
        if target.team == piece.team {
            return Err(MoveError::FriendlyDestination);
        }
        if df.abs() == 1 && dr == dir {
            return Ok(MoveEffects::default());
        }
        return Err(MoveError::IllegalShape);
    }

    if df == 0 {
        // Straight advance onto an empty square: one step always, two steps
        // only before the pawn's first move. The square immediately ahead
        // must be empty; for a single step that square is the destination.
        let steps = dr * dir;
        if steps < 1 || steps > 2 || (steps == 2 && piece.has_moved) {
            return Err(MoveError::IllegalShape);
        }

        let ahead = Square::of(
            Rank::from_index((rank_of(from) + dir) as usize),
            from.file(),
        );
        if !board.is_empty(ahead) {
            return Err(MoveError::PathBlocked);
        }
        return Ok(MoveEffects::default());
    }

    if df.abs() == 1 && dr == dir {
        // Diagonal onto an empty square: only legal as en passant, when the
        // previous move was a double pawn advance that ended right next to
        // this pawn on the destination file. The victim is captured off its
        // own square, not the destination.
        if let Some(last) = last_turn.last_move() {
            let double_advance = last.piece.kind == PieceKind::Pawn
                && (rank_of(last.from) - rank_of(last.to)).abs() == 2;
            let victim = Square::of(from.rank(), to.file());
            if double_advance && last.to == victim {
                return Ok(MoveEffects {
                    extra_capture: Some(victim),
                });
            }
        }
    }

    Err(MoveError::IllegalShape)
}

fn knight(piece: Piece, from: Square, to: Square, board: &Board) -> Result<MoveEffects, MoveError> {
    ensure_destination(piece, board.piece_at(to))?;

    let df = (file_of(to) - file_of(from)).abs();
    let dr = (rank_of(to) - rank_of(from)).abs();
    if (df == 1 && dr == 2) || (df == 2 && dr == 1) {
        Ok(MoveEffects::default())
    } else {
        Err(MoveError::IllegalShape)
    }
}

fn bishop(piece: Piece, from: Square, to: Square, board: &Board) -> Result<MoveEffects, MoveError> {
    ensure_destination(piece, board.piece_at(to))?;

    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    if df == 0 || df.abs() != dr.abs() {
        return Err(MoveError::IllegalShape);
    }
    if !path_is_clear(board, from, to) {
        return Err(MoveError::PathBlocked);
    }
    Ok(MoveEffects::default())
}

fn rook(piece: Piece, from: Square, to: Square, board: &Board) -> Result<MoveEffects, MoveError> {
    ensure_destination(piece, board.piece_at(to))?;

    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    if (df == 0) == (dr == 0) {
        // Both zero (no move at all) or both nonzero (not a straight line).
        return Err(MoveError::IllegalShape);
    }
    if !path_is_clear(board, from, to) {
        return Err(MoveError::PathBlocked);
    }
    Ok(MoveEffects::default())
}

fn queen(piece: Piece, from: Square, to: Square, board: &Board) -> Result<MoveEffects, MoveError> {
    ensure_destination(piece, board.piece_at(to))?;

    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    let straight = (df == 0) != (dr == 0);
    let diagonal = df != 0 && df.abs() == dr.abs();
    if !straight && !diagonal {
        return Err(MoveError::IllegalShape);
    }
    if !path_is_clear(board, from, to) {
        return Err(MoveError::PathBlocked);
    }
    Ok(MoveEffects::default())
}

fn king(piece: Piece, from: Square, to: Square, board: &Board) -> Result<MoveEffects, MoveError> {
    ensure_destination(piece, board.piece_at(to))?;

    // The shape check tolerates a zero delta, but a zero-delta attempt never
    // gets this far: the destination is then the king's own square, which is
    // friendly-occupied. The king's rule does not ask whether the
    // destination is attacked; nothing in the move path prevents moving
    // into check.
    let df = (file_of(to) - file_of(from)).abs();
    let dr = (rank_of(to) - rank_of(from)).abs();
    if df <= 1 && dr <= 1 {
        Ok(MoveEffects::default())
    } else {
        Err(MoveError::IllegalShape)
    }
}
