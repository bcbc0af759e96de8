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

//! Evaluations, which are scores of positions from one side's point of view.

use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A score for a position, in centipawns, from the perspective of one side.
/// Positive values are good for that side.
///
/// Values whose magnitude exceeds 99,000 are mates: 100,000 is a mate
/// delivered immediately, 99,999 is a mate delivered one ply later, and so
/// on. Values below -99,000 are mates against the side.
///
/// # Examples
///
/// ```
/// use snare::base::Eval;
/// let quick_mate = Eval::mate_in(1);
/// let slow_mate = Eval::mate_in(5);
/// assert!(quick_mate > slow_mate);
/// assert!(slow_mate > Eval::centipawns(4_000));
/// ```
pub struct Eval(i32);

impl Eval {
    /// An evaluation which is smaller than every other "normal" evaluation.
    pub const MIN: Eval = Eval(-Eval::MATE_0_VAL - 1000);

    /// An evaluation which is larger than every other "normal" evaluation.
    pub const MAX: Eval = Eval(Eval::MATE_0_VAL + 1000);

    /// The evaluation of a balanced position.
    pub const DRAW: Eval = Eval(0);

    /// The value of delivering stalemate, to the side that delivered it.
    pub const STALEMATE: Eval = Eval(-50);

    /// The internal evaluation of a mate delivered on the current ply.
    const MATE_0_VAL: i32 = 100_000;

    /// The highest value of a position which is not a mate.
    const MATE_CUTOFF: i32 = 99_000;

    /// The value of one pawn.
    const PAWN_VALUE: i32 = 100;

    #[inline(always)]
    /// Construct an `Eval` with the given value in centipawns.
    pub const fn centipawns(x: i32) -> Eval {
        Eval(x)
    }

    #[inline(always)]
    /// Create an `Eval` for delivering mate after the given number of plies.
    /// `-Eval::mate_in(n)` is the value of being mated after `n` plies.
    pub const fn mate_in(nplies: u16) -> Eval {
        Eval(Eval::MATE_0_VAL - nplies as i32)
    }

    #[inline(always)]
    /// Is this evaluation a mate (i.e. a non-normal evaluation)?
    pub const fn is_mate(self) -> bool {
        self.0 > Eval::MATE_CUTOFF || self.0 < -Eval::MATE_CUTOFF
    }

    /// Get the number of plies until mate, assuming perfect play, or `None`
    /// if this is not a mate.
    ///
    /// # Examples
    ///
    /// ```
    /// use snare::base::Eval;
    /// assert_eq!(Eval::centipawns(250).plies_to_mate(), None);
    /// assert_eq!(Eval::mate_in(3).plies_to_mate(), Some(3));
    /// assert_eq!((-Eval::mate_in(2)).plies_to_mate(), Some(2));
    /// ```
    pub const fn plies_to_mate(self) -> Option<u16> {
        if self.0 > Eval::MATE_CUTOFF {
            Some((Eval::MATE_0_VAL - self.0) as u16)
        } else if self.0 < -Eval::MATE_CUTOFF {
            Some((Eval::MATE_0_VAL + self.0) as u16)
        } else {
            None
        }
    }

    #[inline(always)]
    /// Get the value in centipawns of this evaluation. Will return a number
    /// with magnitude greater than 99,000 for mates.
    pub const fn centipawn_val(self) -> i32 {
        self.0
    }
}

impl Display for Eval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.plies_to_mate() {
            Some(plies) if self.0 > 0 => write!(f, "+M{plies}"),
            Some(plies) => write!(f, "-M{plies}"),
            None if self.0 == 0 => write!(f, "00.00"),
            #[allow(clippy::cast_precision_loss)]
            None => write!(f, "{:+2.2}", self.0 as f32 / Eval::PAWN_VALUE as f32),
        }
    }
}

impl Mul<i32> for Eval {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: i32) -> Self::Output {
        Eval(self.0 * rhs)
    }
}

impl AddAssign<Eval> for Eval {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Eval) {
        self.0 += rhs.0;
    }
}

impl SubAssign<Eval> for Eval {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Eval) {
        self.0 -= rhs.0;
    }
}

impl Add<Eval> for Eval {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Eval) -> Eval {
        Eval(self.0 + rhs.0)
    }
}

impl Sub<Eval> for Eval {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Eval) -> Eval {
        Eval(self.0 - rhs.0)
    }
}

impl Neg for Eval {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Eval {
        Eval(-self.0)
    }
}
