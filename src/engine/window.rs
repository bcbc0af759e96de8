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

//! Score windows, which stop the search of a node early once its result has
//! strayed far from what the static scores of its moves predicted.
//!
//! At a node, every move already has a static score. If the best score found
//! by searching rises more than a threshold above the best static score, or
//! falls more than the threshold below the worst static score, the node is
//! treated as settled and its remaining moves are skipped. The threshold
//! depends on how much depth remains below the node.

use crate::base::Eval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A per-depth table of thresholds for leaving a node early.
pub struct ScoreWindow {
    /// The threshold for each remaining depth. Depths beyond the end of the
    /// table use the last entry.
    thresholds: [Eval; ScoreWindow::NUM_DEPTHS],
    /// Whether the window is applied at all.
    enabled: bool,
}

impl ScoreWindow {
    /// The number of depths with their own threshold.
    pub const NUM_DEPTHS: usize = 8;

    /// The thresholds used by default. Index 0 is never consulted, since
    /// nodes with no remaining depth are evaluated statically.
    pub const DEFAULT_THRESHOLDS: [Eval; ScoreWindow::NUM_DEPTHS] = [
        Eval::MAX,
        Eval::centipawns(400),
        Eval::centipawns(600),
        Eval::centipawns(800),
        Eval::centipawns(1000),
        Eval::centipawns(1200),
        Eval::centipawns(1400),
        Eval::centipawns(1600),
    ];

    /// Construct a new window with the given thresholds.
    pub const fn new(thresholds: [Eval; ScoreWindow::NUM_DEPTHS]) -> ScoreWindow {
        ScoreWindow {
            thresholds,
            enabled: true,
        }
    }

    /// Construct a window which never stops a search early.
    pub const fn disabled() -> ScoreWindow {
        ScoreWindow {
            thresholds: ScoreWindow::DEFAULT_THRESHOLDS,
            enabled: false,
        }
    }

    /// Is this window applied?
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the threshold for a node with `depth` plies remaining, or `None`
    /// if the window is disabled.
    pub fn threshold(&self, depth: u8) -> Option<Eval> {
        if !self.enabled {
            return None;
        }
        let i = usize::from(depth).min(ScoreWindow::NUM_DEPTHS - 1);
        Some(self.thresholds[i])
    }

    /// Determine whether `best`, the best score found so far at a node with
    /// `depth` plies remaining, has left the band around the node's static
    /// scores. `best_static` and `worst_static` are the highest and lowest
    /// static scores of the node's moves.
    pub fn is_outside(&self, depth: u8, best: Eval, best_static: Eval, worst_static: Eval) -> bool {
        match self.threshold(depth) {
            Some(t) => best > best_static + t || best < worst_static - t,
            None => false,
        }
    }
}

impl Default for ScoreWindow {
    fn default() -> ScoreWindow {
        ScoreWindow::new(ScoreWindow::DEFAULT_THRESHOLDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that scores inside the band are not cut off.
    fn inside_band() {
        let window = ScoreWindow::default();
        let best_static = Eval::centipawns(200);
        let worst_static = Eval::centipawns(-100);
        assert!(!window.is_outside(1, Eval::centipawns(600), best_static, worst_static));
        assert!(!window.is_outside(1, Eval::centipawns(-500), best_static, worst_static));
    }

    #[test]
    /// Test that scores beyond the band on either side are cut off.
    fn outside_band() {
        let window = ScoreWindow::default();
        let best_static = Eval::centipawns(200);
        let worst_static = Eval::centipawns(-100);
        assert!(window.is_outside(1, Eval::centipawns(601), best_static, worst_static));
        assert!(window.is_outside(1, Eval::centipawns(-501), best_static, worst_static));
        // the band widens with depth
        assert!(!window.is_outside(2, Eval::centipawns(601), best_static, worst_static));
    }

    #[test]
    /// Test that depths past the end of the table reuse the last threshold.
    fn deep_nodes() {
        let window = ScoreWindow::default();
        assert_eq!(window.threshold(7), window.threshold(40));
        assert_eq!(window.threshold(40), Some(Eval::centipawns(1600)));
    }

    #[test]
    /// Test that a disabled window never cuts off.
    fn disabled_window() {
        let window = ScoreWindow::disabled();
        assert!(!window.is_enabled());
        assert_eq!(window.threshold(3), None);
        assert!(!window.is_outside(1, Eval::mate_in(1), Eval::DRAW, Eval::DRAW));
    }
}
