// Copyright 2020 the gambit authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

// TableIndex is a trait for all types that can serve as an index into a table.
// The board grid, ranks, and files are all indexed by these small enums, so
// this trait lets any To/FromPrimitive type be used as a table index.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

/// A square on the board, in rank-major order starting from a1.
#[rustfmt::skip]
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    pub fn of(rank: Rank, file: File) -> Square {
        let rank = rank.to_u32().unwrap();
        let file = file.to_u32().unwrap();
        FromPrimitive::from_u32(rank * 8 + file).unwrap()
    }

    /// Converts grid coordinates as decoded by the frontend into a square.
    /// The grid puts (0, 0) at Black's back rank corner and y counts down
    /// the printed board, so White's back rank is y = 7. Returns `None`
    /// when either coordinate is off the board.
    pub fn from_grid(x: i32, y: i32) -> Option<Square> {
        if x < 0 || x > 7 || y < 0 || y > 7 {
            return None;
        }

        Some(Square::of(
            Rank::from_index((7 - y) as usize),
            File::from_index(x as usize),
        ))
    }

    pub fn rank(self) -> Rank {
        FromPrimitive::from_u32(self.to_u32().unwrap() >> 3).unwrap()
    }

    pub fn file(self) -> File {
        FromPrimitive::from_u32(self.to_u32().unwrap() & 7).unwrap()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Iterates over all 64 squares in index order. Used by the board scans.
pub fn squares() -> impl Iterator<Item = Square> {
    (0..64).map(Square::from_index)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

/// One of the two players. There is no neutral team.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn toggle(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// The rank a team's king and rooks start on, which is also the rank
    /// castling places them back onto.
    pub fn back_rank(self) -> Rank {
        match self {
            Team::White => Rank::One,
            Team::Black => Rank::Eight,
        }
    }

    /// The direction this team's pawns advance, as a rank delta.
    pub fn pawn_direction(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Team::White => "white",
            Team::Black => "black",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(chr)
    }
}

/// A piece on the board: a kind, the team that owns it, and whether it has
/// moved before. The flag starts false and is set when the board commits a
/// move of the piece; it gates the pawn double advance and castling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, team: Team) -> Piece {
        Piece {
            kind,
            team,
            has_moved: false,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match (self.kind, self.team) {
            (PieceKind::Pawn, Team::White) => 'P',
            (PieceKind::Knight, Team::White) => 'N',
            (PieceKind::Bishop, Team::White) => 'B',
            (PieceKind::Rook, Team::White) => 'R',
            (PieceKind::Queen, Team::White) => 'Q',
            (PieceKind::King, Team::White) => 'K',
            (PieceKind::Pawn, Team::Black) => 'p',
            (PieceKind::Knight, Team::Black) => 'n',
            (PieceKind::Bishop, Team::Black) => 'b',
            (PieceKind::Rook, Team::Black) => 'r',
            (PieceKind::Queen, Team::Black) => 'q',
            (PieceKind::King, Team::Black) => 'k',
        };
        f.write_char(chr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_rank_and_file() {
        assert_eq!(Square::A1, Square::of(Rank::One, File::A));
        assert_eq!(Square::H8, Square::of(Rank::Eight, File::H));
        assert_eq!(Square::E4, Square::of(Rank::Four, File::E));
        assert_eq!(Rank::Four, Square::E4.rank());
        assert_eq!(File::E, Square::E4.file());
    }

    #[test]
    fn grid_origin_is_blacks_corner() {
        // The frontend grid starts at Black's back rank, so (0, 0) is a8 and
        // (7, 7) is h1.
        assert_eq!(Some(Square::A8), Square::from_grid(0, 0));
        assert_eq!(Some(Square::H1), Square::from_grid(7, 7));
        assert_eq!(Some(Square::E2), Square::from_grid(4, 6));
        assert_eq!(Some(Square::B8), Square::from_grid(1, 0));
    }

    #[test]
    fn grid_rejects_off_board_coordinates() {
        assert_eq!(None, Square::from_grid(-1, 0));
        assert_eq!(None, Square::from_grid(0, 8));
        assert_eq!(None, Square::from_grid(8, 8));
    }

    #[test]
    fn square_display_is_algebraic() {
        assert_eq!("e4", Square::E4.to_string());
        assert_eq!("a8", Square::A8.to_string());
    }

    #[test]
    fn piece_display_case_follows_team() {
        assert_eq!("Q", Piece::new(PieceKind::Queen, Team::White).to_string());
        assert_eq!("n", Piece::new(PieceKind::Knight, Team::Black).to_string());
    }
}
