/*
  Snare, a time-bounded chess move chooser.
  Copyright (C) 2022 The Snare Authors.

  Snare is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Snare is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Piece types, the colored pieces which occupy squares, and the movement
//! pattern of each type.

use super::{Color, Direction};

use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The type of a piece, without regard to its color.
pub enum Piece {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The way a piece type moves across the board.
pub enum Pattern {
    /// Pushes forward onto empty squares and captures diagonally forward.
    /// The direction depends on the color of the pawn.
    Pawn,
    /// Jumps directly to each listed offset.
    Leap(&'static [Direction]),
    /// Slides along each listed ray until blocked.
    Slide(&'static [Direction]),
}

impl Piece {
    /// Total number of piece types.
    pub const NUM_TYPES: usize = 6;

    /// Every piece type, in ascending order of index.
    pub const ALL_TYPES: [Piece; Piece::NUM_TYPES] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline(always)]
    /// Get the movement pattern of this piece type.
    pub const fn pattern(self) -> Pattern {
        match self {
            Piece::Pawn => Pattern::Pawn,
            Piece::Knight => Pattern::Leap(&Direction::KNIGHT_STEPS),
            Piece::Bishop => Pattern::Slide(&Direction::BISHOP_DIRECTIONS),
            Piece::Rook => Pattern::Slide(&Direction::ROOK_DIRECTIONS),
            Piece::Queen => Pattern::Slide(&Direction::QUEEN_DIRECTIONS),
            Piece::King => Pattern::Leap(&Direction::QUEEN_DIRECTIONS),
        }
    }

    #[inline(always)]
    /// Get an index for this piece type, for use in tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the FEN code of this piece as an uppercase character.
    pub const fn code(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Given a FEN character, convert it to a piece type. Must be uppercase.
    pub const fn from_code(c: char) -> Option<Piece> {
        match c {
            'P' => Some(Piece::Pawn),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece of a given color, as found on a square.
pub struct Occupant {
    /// The side this piece belongs to.
    pub color: Color,
    /// The type of the piece.
    pub piece: Piece,
}

impl Occupant {
    #[inline(always)]
    pub const fn new(color: Color, piece: Piece) -> Occupant {
        Occupant { color, piece }
    }

    /// Get the symbol for this occupant: uppercase for White, lowercase for
    /// Black.
    pub const fn code(self) -> char {
        let c = self.piece.code();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parse a symbol into an occupant. Uppercase letters are White pieces,
    /// lowercase letters are Black pieces.
    pub const fn from_code(c: char) -> Option<Occupant> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match Piece::from_code(c.to_ascii_uppercase()) {
            Some(piece) => Some(Occupant { color, piece }),
            None => None,
        }
    }
}

impl Display for Occupant {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that every piece's code maps back to the same piece.
    fn codes() {
        for pt in Piece::ALL_TYPES {
            assert_eq!(Piece::from_code(pt.code()), Some(pt));
            for color in Color::ALL {
                let occ = Occupant::new(color, pt);
                assert_eq!(Occupant::from_code(occ.code()), Some(occ));
            }
        }
        assert_eq!(Piece::from_code('X'), None);
        assert_eq!(Occupant::from_code('_'), None);
    }

    #[test]
    /// Test that lowercase symbols are Black pieces.
    fn black_is_lowercase() {
        assert_eq!(
            Occupant::from_code('q'),
            Some(Occupant::new(Color::Black, Piece::Queen))
        );
        assert_eq!(Occupant::new(Color::White, Piece::Knight).code(), 'N');
    }

    #[test]
    /// Test that only the sliding pieces slide.
    fn patterns() {
        assert_eq!(Piece::Pawn.pattern(), Pattern::Pawn);
        assert!(matches!(Piece::Knight.pattern(), Pattern::Leap(s) if s.len() == 8));
        assert!(matches!(Piece::King.pattern(), Pattern::Leap(s) if s.len() == 8));
        assert!(matches!(Piece::Rook.pattern(), Pattern::Slide(s) if s.len() == 4));
        assert!(matches!(Piece::Bishop.pattern(), Pattern::Slide(s) if s.len() == 4));
        assert!(matches!(Piece::Queen.pattern(), Pattern::Slide(s) if s.len() == 8));
    }
}
