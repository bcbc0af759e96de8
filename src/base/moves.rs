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

//! Moves, and the search metadata which travels alongside them.

use super::{Eval, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The information of one move, containing its from- and to-squares, packed
/// into one integer.
/// From MSB to LSB:
/// * 4 bits: unused
/// * 6 bits: to-square
/// * 6 bits: from-square
///
/// Promotion needs no field, since a pawn reaching its last rank always
/// becomes a queen.
pub struct Move(u16);

impl Move {
    /// A sentinel value for a move which could not be made, such as the reply
    /// of a side with no legal moves.
    pub const NULL: Move = Move(0xFFFF);

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    /// Make a new `Move` from one square to another.
    pub const fn new(from_square: Square, to_square: Square) -> Move {
        Move(from_square.index() as u16 | ((to_square.index() as u16) << 6))
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from_square(self) -> Square {
        match Square::from_index((self.0 & 63) as usize) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    /// Get the target square of this move.
    pub const fn to_square(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 63) as usize) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    #[inline(always)]
    /// Is this the null move?
    pub const fn is_null(self) -> bool {
        self.0 == Move::NULL.0
    }

    #[inline(always)]
    /// Get a number representing this move uniquely.
    /// The value may change from version to version.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Convert a move from its UCI representation, such as "e2e4".
    /// A fifth character naming the promotion piece is accepted and ignored,
    /// since every promotion is to a queen.
    ///
    /// # Errors
    ///
    /// Will return an error if the string is the wrong length or either
    /// square name is invalid.
    pub fn from_uci(s: &str) -> Result<Move, &'static str> {
        if !(s.len() == 4 || s.len() == 5) || !s.is_ascii() {
            return Err("string was neither a normal move or a promotion");
        }
        let from_sq = Square::from_algebraic(&s[0..2])?;
        let to_sq = Square::from_algebraic(&s[2..4])?;
        if s.len() == 5 && !matches!(&s[4..], "q" | "Q") {
            return Err("promotions are only to a queen");
        }

        Ok(Move::new(from_sq, to_sq))
    }

    /// Convert this move to its UCI representation. The null move is
    /// "0000".
    pub fn to_uci(self) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        format!("{}{}", self.from_square(), self.to_square())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "(null)");
        }
        write!(f, "{} -> {}", self.from_square(), self.to_square())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// What a move does to the opponent.
pub enum MoveFlag {
    /// Nothing out of the ordinary.
    None,
    /// The move attacks the opposing king.
    Check,
    /// The move attacks the opposing king, and the opponent has no reply.
    Checkmate,
    /// The move leaves the opponent without a legal reply while not in check.
    /// Also used for the null move returned by a side with no moves.
    Stalemate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A move along with the metadata a search attaches to it.
pub struct ScoredMove {
    /// The move itself.
    pub m: Move,
    /// The effect of the move on the opponent.
    pub flag: MoveFlag,
    /// The score of the move, from the perspective of the player making it.
    pub eval: Eval,
}

impl ScoredMove {
    /// The move returned by a side which has no legal moves.
    pub const STALEMATE: ScoredMove = ScoredMove {
        m: Move::NULL,
        flag: MoveFlag::Stalemate,
        eval: Eval::DRAW,
    };
}

impl Display for ScoredMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.m, self.eval)?;
        match self.flag {
            MoveFlag::None => Ok(()),
            MoveFlag::Check => write!(f, " check"),
            MoveFlag::Checkmate => write!(f, " checkmate"),
            MoveFlag::Stalemate => write!(f, " stalemate"),
        }
    }
}
