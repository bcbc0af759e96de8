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

//! Performance testing, or "perft," which counts the leaves of the move
//! tree to a fixed depth. Checking these counts against known values is the
//! main regression test for the move generator.

use super::{movegen::get_moves, Color, Position};

/// Count the positions reachable from `pos` in exactly `depth` plies, with
/// `color` to move first.
pub fn perft(pos: &Position, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut total = 0;
    get_moves(pos, color, |_, next, _| {
        total += if depth == 1 {
            1
        } else {
            perft(&next, !color, depth - 1)
        };
    });

    total
}
