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

//! Snare picks a move for one side of a chess game within a time budget,
//! using iterative-deepening negamax search over a material evaluation.

pub mod base;
pub mod cli;
pub mod engine;

#[cfg(test)]
/// A module containing Forsyth-Edwards Notation (FEN) strings which are used
/// for tests.
mod fens;
