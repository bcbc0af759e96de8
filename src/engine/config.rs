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

use super::window::ScoreWindow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for a search.
pub struct SearchConfig {
    /// The first depth searched by iterative deepening. Depth 1 needs no
    /// search, since it is the static score of each move.
    pub start_depth: u8,
    /// The deepest that iterative deepening will go, even if there is time
    /// left.
    pub max_depth: u8,
    /// The policy for stopping the search of a node early.
    pub window: ScoreWindow,
    /// The number of nodes which have to be searched before it is worthwhile
    /// to poll the turn clock.
    pub limit_update_increment: u64,
}

impl SearchConfig {
    pub const fn new() -> SearchConfig {
        SearchConfig {
            start_depth: 2,
            max_depth: 8,
            window: ScoreWindow::new(ScoreWindow::DEFAULT_THRESHOLDS),
            limit_update_increment: 100,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new()
    }
}
