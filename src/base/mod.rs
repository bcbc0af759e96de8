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

#![warn(clippy::pedantic)]

//! Shared data types and useful basic definitions found across the entire
//! Snare engine: the board, moves, move generation, and attack detection.

// Many module elements are re-exported to make names more ergonomic to access.

pub mod attacks;

mod color;
pub use color::Color;

mod direction;
pub use direction::Direction;

mod eval;
pub use eval::Eval;

pub mod movegen;

mod moves;
pub use moves::{Move, MoveFlag, ScoredMove};

pub mod perft;

mod piece;
pub use piece::{Occupant, Pattern, Piece};

mod position;
pub use position::Position;

mod square;
pub use square::Square;

mod tables;
