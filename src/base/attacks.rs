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

//! Attack detection.
//!
//! After a move has been made, one scan of the board decides whether the move
//! was legal and whether it checks the opponent, and counts the material of
//! both sides along the way.

use super::{
    tables::{KNIGHT_HOPS, RAYS},
    Color, Direction, Piece, Position, Square,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The verdict on a position immediately after a move.
pub enum Verdict {
    /// The mover's own king is attacked (or gone), so the move was illegal.
    Illegal,
    /// Neither king is attacked.
    Quiet,
    /// The opponent's king is attacked (or gone).
    Check,
}

impl Verdict {
    /// Get the verdict as a signed indicator: negative if illegal, positive
    /// if check, and zero otherwise.
    pub const fn indicator(self) -> i8 {
        match self {
            Verdict::Illegal => -1,
            Verdict::Quiet => 0,
            Verdict::Check => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
/// The number of pieces of each type and color on a board.
pub struct Census {
    /// Counts, indexed by color and then by piece type.
    counts: [[u8; Piece::NUM_TYPES]; 2],
}

impl Census {
    #[inline(always)]
    /// Get the number of pieces of the given color and type.
    pub const fn count(&self, color: Color, piece: Piece) -> u8 {
        self.counts[color.index()][piece.index()]
    }

    #[inline(always)]
    /// Get the number of pieces of the given type, of both colors.
    pub const fn total(&self, piece: Piece) -> u8 {
        self.count(Color::White, piece) + self.count(Color::Black, piece)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Everything learned from one scan of a board after a move.
pub struct Inspection {
    /// Whether the move was legal, and whether it gives check.
    pub verdict: Verdict,
    /// The material left on the board.
    pub census: Census,
}

/// Inspect a position immediately after `mover` has made a move.
///
/// The verdict is `Illegal` if the mover's king is attacked. Otherwise it is
/// `Check` if the opponent's king is attacked, and `Quiet` if not. A king
/// missing from the board counts as attacked, since its side has already
/// lost.
pub fn inspect(pos: &Position, mover: Color) -> Inspection {
    let mut census = Census::default();
    let mut kings = [None; 2];
    for sq in Square::all() {
        if let Some(occ) = pos[sq] {
            census.counts[occ.color.index()][occ.piece.index()] += 1;
            if occ.piece == Piece::King {
                kings[occ.color.index()] = Some(sq);
            }
        }
    }

    let defender = !mover;
    let king_attacked = |color: Color| match kings[color.index()] {
        Some(king_sq) => is_attacked(pos, king_sq, !color),
        None => true,
    };
    let verdict = if king_attacked(mover) {
        Verdict::Illegal
    } else if king_attacked(defender) {
        Verdict::Check
    } else {
        Verdict::Quiet
    };

    Inspection { verdict, census }
}

/// Determine whether the king of the given color is in check.
/// A king which is not on the board is always in check.
pub fn in_check(pos: &Position, color: Color) -> bool {
    match pos.king_square(color) {
        Some(king_sq) => is_attacked(pos, king_sq, !color),
        None => true,
    }
}

/// Determine whether any piece of color `by` attacks `target`.
///
/// Every queen ray out of `target` is followed to the first occupied square,
/// and the piece found there attacks `target` if it could move back along the
/// same ray. Knights are found by looking one knight-hop away.
pub fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    let pawn_dy = by.pawn_direction().dy;
    for (ray, dir) in RAYS[target.index()].iter().zip(Direction::QUEEN_DIRECTIONS) {
        for (dist, &sq) in ray.iter().enumerate() {
            let Some(occ) = pos[sq] else {
                continue;
            };
            if occ.color == by {
                let attacks = match occ.piece {
                    Piece::Queen => true,
                    Piece::Rook => !dir.is_diagonal(),
                    Piece::Bishop => dir.is_diagonal(),
                    Piece::King => dist == 0,
                    // the pawn must capture toward `target`, i.e. against `dir`
                    Piece::Pawn => dist == 0 && dir.is_diagonal() && dir.dy == -pawn_dy,
                    Piece::Knight => false,
                };
                if attacks {
                    return true;
                }
            }
            break;
        }
    }

    KNIGHT_HOPS[target.index()].iter().any(|&sq| {
        matches!(pos[sq], Some(occ) if occ.color == by && occ.piece == Piece::Knight)
    })
}
