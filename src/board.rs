// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::rules;
use crate::turn::{LastMove, TurnRecord};
use crate::types::{squares, File, Piece, PieceKind, Rank, Square, TableIndex, Team, FILES, RANKS};

/// Why a move attempt was rejected. The session-level surface collapses
/// this to a boolean; the enum exists so callers and tests can tell the
/// cases apart without re-querying the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NoPieceAtSource,
    WrongTeam,
    FriendlyDestination,
    IllegalShape,
    PathBlocked,
    CastlingIneligible,
    CastlingPathBlocked,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            MoveError::OutOfBounds => "coordinates are off the board",
            MoveError::NoPieceAtSource => "no piece at the source square",
            MoveError::WrongTeam => "that piece belongs to the other team",
            MoveError::FriendlyDestination => "the destination holds a friendly piece",
            MoveError::IllegalShape => "the piece does not move that way",
            MoveError::PathBlocked => "another piece is in the way",
            MoveError::CastlingIneligible => "castling needs an unmoved king and rook",
            MoveError::CastlingPathBlocked => "the squares between king and rook are not empty",
        };
        f.write_str(msg)
    }
}

/// The 8x8 grid. Each cell exclusively owns at most one piece; the grid is
/// the sole source of truth, and a captured piece is simply dropped when
/// its cell is overwritten or cleared. The board also remembers the most
/// recent committed move for en passant detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; 64],
    last_turn: TurnRecord,
}

impl Board {
    /// An empty board. Tests and tooling build custom positions from this
    /// with `add_piece`.
    pub fn empty() -> Board {
        Board {
            grid: [None; 64],
            last_turn: TurnRecord::default(),
        }
    }

    /// A board in the standard chess starting position.
    pub fn new() -> Board {
        use crate::types::PieceKind::*;

        let mut board = Board::empty();
        let back_ranks = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (i, &kind) in back_ranks.iter().enumerate() {
            let file = File::from_index(i);
            board.grid[Square::of(Rank::One, file).as_index()] =
                Some(Piece::new(kind, Team::White));
            board.grid[Square::of(Rank::Eight, file).as_index()] =
                Some(Piece::new(kind, Team::Black));
        }

        for &file in &FILES {
            board.grid[Square::of(Rank::Two, file).as_index()] =
                Some(Piece::new(Pawn, Team::White));
            board.grid[Square::of(Rank::Seven, file).as_index()] =
                Some(Piece::new(Pawn, Team::Black));
        }

        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.as_index()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_turn.last_move()
    }

    pub fn add_piece(&mut self, square: Square, piece: Piece) -> Result<(), ()> {
        if self.piece_at(square).is_some() {
            return Err(());
        }

        self.grid[square.as_index()] = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, square: Square) -> Result<(), ()> {
        if self.piece_at(square).is_none() {
            return Err(());
        }

        self.grid[square.as_index()] = None;
        Ok(())
    }
}

//
// Move orchestration
//

impl Board {
    /// Attempts to move `team`'s piece from `from` to `to`. On success the
    /// board is updated and the turn record rewritten; on failure nothing
    /// changes at all. Castling is requested by targeting one's own king
    /// with one's own rook (or the other way around), matching how the
    /// frontend's two-cell selection naturally encodes it.
    pub fn try_move(&mut self, team: Team, from: Square, to: Square) -> Result<(), MoveError> {
        let result = self.dispatch_move(team, from, to);
        match result {
            Ok(()) => debug!("{}: {} to {} committed", team, from, to),
            Err(reason) => debug!("{}: {} to {} rejected: {}", team, from, to, reason),
        }
        result
    }

    fn dispatch_move(&mut self, team: Team, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtSource)?;
        if piece.team != team {
            return Err(MoveError::WrongTeam);
        }

        // A friendly-occupied destination is only ever legal as a castling
        // request, so it gets its own branch instead of flowing through the
        // per-piece rules.
        if let Some(occupant) = self.piece_at(to) {
            if occupant.team == team {
                return self.castle(team, from, piece, to, occupant);
            }
        }

        let last = self.last_turn;
        let effects = rules::evaluate(piece, from, to, self, &last)?;

        // The move is accepted; commit it. Any capture on the destination
        // square happens by overwrite, and an en passant victim is cleared
        // off its own square first.
        if let Some(victim) = effects.extra_capture {
            self.grid[victim.as_index()] = None;
        }

        let mut moved = piece;
        moved.has_moved = true;
        self.grid[from.as_index()] = None;
        self.grid[to.as_index()] = Some(moved);
        self.last_turn.record(from, to, moved);
        Ok(())
    }

    /// Castling: both squares hold a friendly piece, the pair is exactly one
    /// king and one rook, neither has moved, and every square strictly
    /// between them is empty. The pieces land on fixed files of the team's
    /// back rank regardless of where they started: king g / rook f on the
    /// king side, king b / rook c on the queen side. No square the king is
    /// on, passes through, or lands on is tested for attack.
    fn castle(
        &mut self,
        team: Team,
        from: Square,
        source: Piece,
        to: Square,
        dest: Piece,
    ) -> Result<(), MoveError> {
        let (king_sq, king, rook_sq, rook) = match (source.kind, dest.kind) {
            (PieceKind::King, PieceKind::Rook) => (from, source, to, dest),
            (PieceKind::Rook, PieceKind::King) => (to, dest, from, source),
            _ => return Err(MoveError::FriendlyDestination),
        };

        if king.has_moved || rook.has_moved || king_sq.rank() != rook_sq.rank() {
            return Err(MoveError::CastlingIneligible);
        }
        if !rules::path_is_clear(self, king_sq, rook_sq) {
            return Err(MoveError::CastlingPathBlocked);
        }

        let back = team.back_rank();
        let kingside = rook_sq.file().as_index() > king_sq.file().as_index();
        let (king_to, rook_to) = if kingside {
            (Square::of(back, File::G), Square::of(back, File::F))
        } else {
            (Square::of(back, File::B), Square::of(back, File::C))
        };

        // Clear both sources before writing the targets; they can overlap
        // when the pair is not on its original files. Castling commits
        // without touching the has-moved flags or the turn record.
        self.grid[king_sq.as_index()] = None;
        self.grid[rook_sq.as_index()] = None;
        self.grid[king_to.as_index()] = Some(king);
        self.grid[rook_to.as_index()] = Some(rook);
        Ok(())
    }
}

//
// Attack detection
//

impl Board {
    /// Best-effort "is this square attacked" scan: every piece of
    /// `attacker` is asked whether it could move to `target` under the
    /// ordinary movement rules, with a blank turn record so en passant
    /// never fires. Movement is a proxy for attack, which is wrong for
    /// pawns (a pawn attacks diagonally but moves straight), so a pawn
    /// counts as "attacking" the empty square ahead of it and never an
    /// empty diagonal. Nothing in the move path consults this; it exists
    /// for callers that want to display check.
    pub fn is_square_attacked(&self, attacker: Team, target: Square) -> bool {
        let blank = TurnRecord::default();
        for sq in squares() {
            if let Some(piece) = self.piece_at(sq) {
                if piece.team == attacker
                    && rules::evaluate(piece, sq, target, self, &blank).is_ok()
                {
                    return true;
                }
            }
        }

        false
    }

    /// Whether `team`'s king currently sits on a square the opposing team
    /// attacks, with all of `is_square_attacked`'s caveats.
    pub fn is_check(&self, team: Team) -> bool {
        for sq in squares() {
            if let Some(piece) = self.piece_at(sq) {
                if piece.kind == PieceKind::King
                    && piece.team == team
                    && self.is_square_attacked(team.toggle(), sq)
                {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            for &file in &FILES {
                let sq = Square::of(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in &FILES {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for &file in &FILES {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_layout() {
        let board = Board::new();

        // Pawns on ranks two and seven.
        for &file in &FILES {
            let white = board.piece_at(Square::of(Rank::Two, file)).unwrap();
            assert_eq!(PieceKind::Pawn, white.kind);
            assert_eq!(Team::White, white.team);
            assert!(!white.has_moved);

            let black = board.piece_at(Square::of(Rank::Seven, file)).unwrap();
            assert_eq!(PieceKind::Pawn, black.kind);
            assert_eq!(Team::Black, black.team);
        }

        // Back ranks in standard order.
        let order = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (i, &kind) in order.iter().enumerate() {
            let file = File::from_index(i);
            assert_eq!(kind, board.piece_at(Square::of(Rank::One, file)).unwrap().kind);
            assert_eq!(
                kind,
                board.piece_at(Square::of(Rank::Eight, file)).unwrap().kind
            );
        }

        // The middle 32 squares are empty.
        for &rank in &[Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
            for &file in &FILES {
                assert!(board.is_empty(Square::of(rank, file)));
            }
        }

        assert_eq!(None, board.last_move());
    }

    #[test]
    fn add_piece_refuses_occupied_square() {
        let mut board = Board::empty();
        board
            .add_piece(Square::D4, Piece::new(PieceKind::Queen, Team::White))
            .unwrap();
        assert!(board
            .add_piece(Square::D4, Piece::new(PieceKind::Pawn, Team::Black))
            .is_err());
    }

    #[test]
    fn remove_piece_refuses_empty_square() {
        let mut board = Board::empty();
        assert!(board.remove_piece(Square::D4).is_err());
    }

    #[test]
    fn display_draws_the_grid() {
        let board = Board::new();
        let drawn = board.to_string();
        // Black's back rank comes out first, White's last.
        let first_line = drawn.lines().next().unwrap();
        assert!(first_line.contains('r'));
        assert!(first_line.contains('k'));
        assert!(drawn.contains(" a "));
    }
}
