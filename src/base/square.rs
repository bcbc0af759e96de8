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

//! Squares, which are the 64 cells of a board.

use super::Direction;

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A square on the board.
/// Internally this is the index `x + y * 8`, where `x` is the file (0 is the
/// a-file) and `y` is the rank (0 is rank 1, White's back rank).
pub struct Square(u8);

impl Square {
    /// The number of squares on a board.
    pub const NUM: usize = 64;

    #[inline(always)]
    /// Create a `Square` from a file `x` and a rank `y`.
    /// Returns `None` if either coordinate is off the board.
    pub const fn new(x: u8, y: u8) -> Option<Square> {
        if x < 8 && y < 8 {
            Some(Square(x + y * 8))
        } else {
            None
        }
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a `Square` from its index `x + y * 8`.
    /// Returns `None` if the index is 64 or larger.
    pub const fn from_index(i: usize) -> Option<Square> {
        if i < Square::NUM {
            Some(Square(i as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    /// Get the file of this square, from 0 (a-file) to 7 (h-file).
    pub const fn x(self) -> u8 {
        self.0 & 7
    }

    #[inline(always)]
    /// Get the rank of this square, from 0 (rank 1) to 7 (rank 8).
    pub const fn y(self) -> u8 {
        self.0 >> 3
    }

    #[inline(always)]
    /// Get the index of this square, for use in tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    /// Step from this square in the given direction.
    /// Both coordinates are bounds-checked individually, so a step which
    /// leaves the board yields `None` rather than wrapping to another file.
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        let x = self.x() as i8 + dir.dx;
        let y = self.y() as i8 + dir.dy;
        if 0 <= x && x < 8 && 0 <= y && y < 8 {
            Some(Square((x + y * 8) as u8))
        } else {
            None
        }
    }

    /// Iterate over every square on the board, in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Convert an algebraic string, such as "e4", into a square.
    ///
    /// # Errors
    ///
    /// Will return an error if the string is not two characters long, or if
    /// either character does not name a file or rank.
    pub fn from_algebraic(s: &str) -> Result<Square, &'static str> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err("square name must be 2 characters");
        }
        let x = match bytes[0] {
            c @ b'a'..=b'h' => c - b'a',
            _ => return Err("illegal file for square"),
        };
        let y = match bytes[1] {
            c @ b'1'..=b'8' => c - b'1',
            _ => return Err("expected number for square rank"),
        };

        Ok(Square(x + y * 8))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.x()),
            char::from(b'1' + self.y())
        )
    }
}
