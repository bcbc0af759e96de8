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

//! Directions, which describe motions between `Square`s as a pair of file
//! and rank offsets.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A difference between two squares.
/// Unlike a raw index offset, a `Direction` keeps its file and rank parts
/// apart, so that stepping off the edge of the board is always detectable.
pub struct Direction {
    /// The change in file (x).
    pub dx: i8,
    /// The change in rank (y).
    pub dy: i8,
}

impl Direction {
    /* Cardinal directions */

    /// A move "north", toward Black's back rank. White pawns travel this way.
    pub const NORTH: Direction = Direction::new(0, 1);

    /// A move "east", toward the h-file.
    pub const EAST: Direction = Direction::new(1, 0);

    /// A move "south", toward White's back rank. Black pawns travel this way.
    pub const SOUTH: Direction = Direction::new(0, -1);

    /// A move "west", toward the a-file.
    pub const WEST: Direction = Direction::new(-1, 0);

    /* Composite directions */

    /// A move "northwest".
    pub const NORTHWEST: Direction = Direction::new(-1, 1);
    /// A move "northeast".
    pub const NORTHEAST: Direction = Direction::new(1, 1);
    /// A move "southeast".
    pub const SOUTHEAST: Direction = Direction::new(1, -1);
    /// A move "southwest".
    pub const SOUTHWEST: Direction = Direction::new(-1, -1);

    /* Knight directions */

    /// A move "north-by-northwest".
    pub const NNW: Direction = Direction::new(-1, 2);
    /// A move "north-by-northeast".
    pub const NNE: Direction = Direction::new(1, 2);
    /// A move "east-by-northeast".
    pub const ENE: Direction = Direction::new(2, 1);
    /// A move "east-by-southeast".
    pub const ESE: Direction = Direction::new(2, -1);
    /// A move "south-by-southeast".
    pub const SSE: Direction = Direction::new(1, -2);
    /// A move "south-by-southwest".
    pub const SSW: Direction = Direction::new(-1, -2);
    /// A move "west-by-southwest".
    pub const WSW: Direction = Direction::new(-2, -1);
    /// A move "west-by-northwest".
    pub const WNW: Direction = Direction::new(-2, 1);

    /// The four directions a rook slides in.
    pub const ROOK_DIRECTIONS: [Direction; 4] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
    ];

    /// The four directions a bishop slides in.
    pub const BISHOP_DIRECTIONS: [Direction; 4] = [
        Direction::NORTHEAST,
        Direction::SOUTHEAST,
        Direction::SOUTHWEST,
        Direction::NORTHWEST,
    ];

    /// All eight queen directions, in clockwise order starting from north.
    /// These are also the steps a king may take.
    pub const QUEEN_DIRECTIONS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTHEAST,
        Direction::EAST,
        Direction::SOUTHEAST,
        Direction::SOUTH,
        Direction::SOUTHWEST,
        Direction::WEST,
        Direction::NORTHWEST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Direction; 8] = [
        Direction::NNW,
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
    ];

    #[inline(always)]
    /// Construct a new `Direction` from a file offset and a rank offset.
    pub const fn new(dx: i8, dy: i8) -> Direction {
        Direction { dx, dy }
    }

    #[inline(always)]
    /// Is this direction a diagonal one, i.e. does it change file and rank by
    /// the same magnitude?
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dx.abs() == self.dy.abs()
    }
}
