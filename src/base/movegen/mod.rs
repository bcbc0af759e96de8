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

//! Move generation.
//!
//! Moves are generated piece by piece, scanning the board from a1 to h8, so
//! the order of the generated moves is always the same for a given position.
//! Each piece's moves follow from its `Pattern`. Pseudo-legal moves are then
//! played out and inspected, and those which leave the mover's king attacked
//! are discarded.


use super::{
    attacks::{in_check, inspect, Inspection, Verdict},
    Color, Direction, Move, Pattern, Position, Square,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The state of a game from the perspective of the side to move.
pub enum Outcome {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move has no legal moves and is in check.
    Checkmate,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

/// Enumerate the legal moves of `color` in `pos`.
/// For each one, `callback` receives the move, the position after the move,
/// and the inspection of that position.
pub fn get_moves(pos: &Position, color: Color, mut callback: impl FnMut(Move, Position, Inspection)) {
    pseudo_moves(pos, color, |m| {
        let next = pos.apply(m);
        let inspection = inspect(&next, color);
        if inspection.verdict != Verdict::Illegal {
            callback(m, next, inspection);
        }
    });
}

/// Get the legal moves of `color` in `pos`, in generation order.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(40);
    get_moves(pos, color, |m, _, _| moves.push(m));
    moves
}

/// Determine whether `color` has any legal move in `pos`.
/// Candidates after the first legal one are not played out.
pub fn has_moves(pos: &Position, color: Color) -> bool {
    let mut found = false;
    pseudo_moves(pos, color, |m| {
        found = found || inspect(&pos.apply(m), color).verdict != Verdict::Illegal;
    });
    found
}

/// Determine whether `m` is a legal move for `color` in `pos`.
pub fn is_legal(pos: &Position, color: Color, m: Move) -> bool {
    if m.is_null() {
        return false;
    }
    match pos[m.from_square()] {
        Some(occ) if occ.color == color => (),
        _ => return false,
    };
    let mut found = false;
    pseudo_moves(pos, color, |candidate| found |= candidate == m);

    found && inspect(&pos.apply(m), color).verdict != Verdict::Illegal
}

/// Determine the state of the game for the side to move.
pub fn outcome(pos: &Position, to_move: Color) -> Outcome {
    if has_moves(pos, to_move) {
        Outcome::Ongoing
    } else if in_check(pos, to_move) {
        Outcome::Checkmate
    } else {
        Outcome::Stalemate
    }
}

/// Enumerate the pseudo-legal moves of `color` in `pos`: moves which obey the
/// movement rules of each piece but may leave the mover's own king attacked.
pub fn pseudo_moves(pos: &Position, color: Color, mut callback: impl FnMut(Move)) {
    for (sq, pt) in pos.pieces_of(color) {
        match pt.pattern() {
            Pattern::Pawn => pawn_moves(pos, sq, color, &mut callback),
            Pattern::Leap(steps) => leaper_moves(pos, sq, color, steps, &mut callback),
            Pattern::Slide(rays) => slider_moves(pos, sq, color, rays, &mut callback),
        }
    }
}

#[inline(always)]
/// Can a piece of color `color` move onto `target`? It can if the square is
/// empty or holds an opposing piece.
fn can_land(pos: &Position, target: Square, color: Color) -> bool {
    pos[target].map_or(true, |occ| occ.color != color)
}

/// Generate the moves of a pawn on `sq`.
/// Diagonal captures off either edge of the board are skipped individually.
fn pawn_moves(pos: &Position, sq: Square, color: Color, callback: &mut impl FnMut(Move)) {
    let dir = color.pawn_direction();

    if let Some(one) = sq.offset(dir) {
        if pos[one].is_none() {
            callback(Move::new(sq, one));
            if sq.y() == color.pawn_start_rank() {
                if let Some(two) = one.offset(dir) {
                    if pos[two].is_none() {
                        callback(Move::new(sq, two));
                    }
                }
            }
        }
    }

    for side in [Direction::WEST, Direction::EAST] {
        let capture_dir = Direction::new(side.dx, dir.dy);
        if let Some(target) = sq.offset(capture_dir) {
            if matches!(pos[target], Some(occ) if occ.color != color) {
                callback(Move::new(sq, target));
            }
        }
    }
}

/// Generate the moves of a knight or king on `sq`, which jumps by each of
/// `steps`.
fn leaper_moves(
    pos: &Position,
    sq: Square,
    color: Color,
    steps: &[Direction],
    callback: &mut impl FnMut(Move),
) {
    for &step in steps {
        if let Some(target) = sq.offset(step) {
            if can_land(pos, target, color) {
                callback(Move::new(sq, target));
            }
        }
    }
}

/// Generate the moves of a rook, bishop, or queen on `sq`.
/// Each ray stops at the first occupied square, which is included only if it
/// holds an opposing piece.
fn slider_moves(
    pos: &Position,
    sq: Square,
    color: Color,
    rays: &[Direction],
    callback: &mut impl FnMut(Move),
) {
    for &dir in rays {
        let mut current = sq;
        while let Some(target) = current.offset(dir) {
            match pos[target] {
                None => callback(Move::new(sq, target)),
                Some(occ) => {
                    if occ.color != color {
                        callback(Move::new(sq, target));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}
