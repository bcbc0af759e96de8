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

//! Static evaluation of positions.
//!
//! Evaluation is purely material, with two structural adjustments: a bonus
//! for the bishop pair, and a re-weighting of knights and rooks by how many
//! pawns remain. Knights are better in closed positions with many pawns,
//! and rooks are better in open ones.

use crate::base::{
    attacks::{in_check, inspect, Census, Inspection, Verdict},
    movegen::get_moves,
    Color, Eval, MoveFlag, Piece, Position, ScoredMove,
};

/// The bonus for having at least two bishops.
pub const BISHOP_PAIR_VALUE: Eval = Eval::centipawns(70);

/// The bonus for a move which checks the opponent.
pub const CHECK_VALUE: Eval = Eval::centipawns(300);

/// The number of pawns on the board at which knights and rooks are worth
/// exactly their base values.
const PAWN_REFERENCE: i32 = 7;

/// The change in value of each knight (and the opposite change in value of
/// each rook) for each pawn on the board beyond `PAWN_REFERENCE`.
const PAWN_ADJUSTMENT: i32 = 5;

#[inline(always)]
/// Get the base value of one piece of the given type.
pub const fn value(pt: Piece) -> Eval {
    Eval::centipawns(match pt {
        Piece::Pawn => 100,
        Piece::Knight => 315,
        Piece::Bishop => 315,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 4500,
    })
}

/// Get the material value of one side's pieces, including the bishop pair
/// bonus and the pawn re-weighting of knights and rooks.
pub fn material(census: &Census, color: Color) -> Eval {
    let mut total = Eval::DRAW;
    for pt in Piece::ALL_TYPES {
        total += value(pt) * i32::from(census.count(color, pt));
    }

    if census.count(color, Piece::Bishop) >= 2 {
        total += BISHOP_PAIR_VALUE;
    }

    let pawn_shift = (i32::from(census.total(Piece::Pawn)) - PAWN_REFERENCE) * PAWN_ADJUSTMENT;
    total += Eval::centipawns(pawn_shift) * i32::from(census.count(color, Piece::Knight));
    total -= Eval::centipawns(pawn_shift) * i32::from(census.count(color, Piece::Rook));

    total
}

/// Score the position reached by a move, from the perspective of the player
/// who made the move.
pub fn score_inspection(inspection: &Inspection, mover: Color) -> Eval {
    let mut score = material(&inspection.census, mover) - material(&inspection.census, !mover);
    if inspection.verdict == Verdict::Check {
        score += CHECK_VALUE;
    }
    score
}

/// Evaluate a position from the perspective of `color`, the side to move.
/// This is the negation of the score of the move which reached the position,
/// so a side in check is penalized by the check bonus.
pub fn evaluate(pos: &Position, color: Color) -> Eval {
    -score_inspection(&inspect(pos, !color), !color)
}

/// Get the value of a position in which `color`, to move, has no legal moves.
/// `ply` is the distance from the root of the search, so that mates found
/// sooner are worth more.
pub fn terminal_value(pos: &Position, color: Color, ply: u16) -> Eval {
    if in_check(pos, color) {
        -Eval::mate_in(ply)
    } else {
        // the opponent delivered stalemate
        -Eval::STALEMATE
    }
}

/// Get the legal moves of `color` in `pos`, in generation order, each scored
/// statically and flagged if it gives check.
pub fn scored_moves(pos: &Position, color: Color) -> Vec<ScoredMove> {
    let mut moves = Vec::with_capacity(40);
    get_moves(pos, color, |m, _, inspection| {
        moves.push(ScoredMove {
            m,
            flag: match inspection.verdict {
                Verdict::Check => MoveFlag::Check,
                _ => MoveFlag::None,
            },
            eval: score_inspection(&inspection, color),
        });
    });
    moves
}
