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

//! Primary search algorithms.
//!
//! Snare uses negamax search with alpha-beta pruning, which runs in
//! Omega(b^{d/2}) time when the best moves happen to be searched first.
//! On top of alpha-beta, each node may be cut short by the configured
//! `ScoreWindow` once its result strays far from the static scores of its
//! moves.

use crate::base::{Color, Eval, Position, ScoredMove};

use super::{
    config::SearchConfig,
    evaluate::{evaluate, scored_moves, terminal_value},
    limit::TurnClock,
};

use nohash_hasher::IntMap;

use std::{fmt, sync::PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
/// The types of errors which can occur during a search.
pub enum SearchError {
    /// This search failed due to timeout.
    Timeout,
    /// This search failed because a lock was poisoned.
    Poison,
}

impl<T> From<PoisonError<T>> for SearchError {
    #[inline(always)]
    fn from(_: PoisonError<T>) -> Self {
        SearchError::Poison
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Timeout => write!(f, "search timed out"),
            SearchError::Poison => write!(f, "a search lock was poisoned"),
        }
    }
}

#[allow(clippy::module_name_repetitions)]
/// The result of performing a search.
/// The `Ok` version contains data on the search, while the `Err` version
/// contains a reason why the search failed.
pub type SearchResult = Result<SearchInfo, SearchError>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
/// Information about a completed search of every root move to one depth.
pub struct SearchInfo {
    /// The score of each root move, keyed by `Move::value`.
    /// A move which could not beat the best move found before it may only
    /// have an upper bound on its true score, but no such move ever ties the
    /// best score.
    pub scores: IntMap<u16, Eval>,
    /// The score of the best root move.
    pub eval: Eval,
    /// The depth to which every root move was searched.
    pub depth: u8,
    /// The number of nodes evaluated in this search.
    pub num_nodes_evaluated: u64,
}

/// The state which is shared across the recursive calls of a search.
pub struct Searcher<'a, C: TurnClock + ?Sized> {
    /// The configuration of this search.
    config: &'a SearchConfig,
    /// The clock which says when the turn is over.
    clock: &'a C,
    /// The cumulative number of nodes evaluated by this searcher.
    num_nodes_evaluated: u64,
    /// The cumulative number of nodes visited since we last polled the clock.
    nodes_since_limit_update: u64,
    /// Whether the clock has reported that the turn is over.
    over: bool,
}

impl<'a, C: TurnClock + ?Sized> Searcher<'a, C> {
    /// Construct a new `Searcher` using a given configuration and clock.
    pub fn new(config: &'a SearchConfig, clock: &'a C) -> Searcher<'a, C> {
        Searcher {
            config,
            clock,
            num_nodes_evaluated: 0,
            nodes_since_limit_update: 0,
            over: false,
        }
    }

    #[inline(always)]
    /// Get the number of nodes this searcher has visited.
    pub fn num_nodes_evaluated(&self) -> u64 {
        self.num_nodes_evaluated
    }

    #[inline(always)]
    /// Has the clock reported that the turn is over?
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Search every move in `root` to `depth` plies, where `root` holds the
    /// legal moves of `color` in `pos` in the order they should be searched.
    ///
    /// # Errors
    ///
    /// Will return `SearchError::Timeout` if the turn ended before every move
    /// was searched. The partial result is discarded.
    pub fn search_root(
        &mut self,
        pos: &Position,
        color: Color,
        root: &[ScoredMove],
        depth: u8,
    ) -> SearchResult {
        if self.over || self.clock.poll(0) {
            self.over = true;
            return Err(SearchError::Timeout);
        }
        let nodes_before = self.num_nodes_evaluated;
        let mut scores = IntMap::default();
        let mut best = Eval::MIN;

        for sm in root {
            // a lower bound one below the best keeps the scores of tied moves
            // exact
            let alpha = if best == Eval::MIN {
                Eval::MIN
            } else {
                best - Eval::centipawns(1)
            };
            let child = pos.apply(sm.m);
            let score = -self.negamax(
                &child,
                !color,
                depth.saturating_sub(1),
                1,
                -Eval::MAX,
                -alpha,
            );
            if self.over {
                return Err(SearchError::Timeout);
            }
            scores.insert(sm.m.value(), score);
            best = best.max(score);
        }

        Ok(SearchInfo {
            scores,
            eval: best,
            depth,
            num_nodes_evaluated: self.num_nodes_evaluated - nodes_before,
        })
    }

    /// Evaluate `pos` with `color` to move by searching `depth` plies ahead.
    /// `ply` is the distance from the root, used to prefer faster mates.
    /// The score is fail-soft: if it is at most `alpha` it is only an upper
    /// bound, and if it is at least `beta` it is only a lower bound.
    pub fn negamax(
        &mut self,
        pos: &Position,
        color: Color,
        depth: u8,
        ply: u16,
        mut alpha: Eval,
        beta: Eval,
    ) -> Eval {
        self.increment_nodes();
        if depth == 0 || self.over {
            return evaluate(pos, color);
        }

        let moves = scored_moves(pos, color);
        if moves.is_empty() {
            return terminal_value(pos, color, ply);
        }

        if depth == 1 {
            // each child would be evaluated statically, and that is exactly
            // the score already attached to each move
            return moves.iter().map(|sm| sm.eval).max().unwrap_or(Eval::MIN);
        }

        let (best_static, worst_static) = moves
            .iter()
            .fold((Eval::MIN, Eval::MAX), |(hi, lo), sm| {
                (hi.max(sm.eval), lo.min(sm.eval))
            });

        let mut best = Eval::MIN;
        for sm in &moves {
            let child = pos.apply(sm.m);
            let score = -self.negamax(&child, !color, depth - 1, ply + 1, -beta, -alpha);
            if score > best {
                best = score;
                if best > alpha {
                    alpha = best;
                }
            }
            if self.over
                || alpha >= beta
                || self
                    .config
                    .window
                    .is_outside(depth, best, best_static, worst_static)
            {
                break;
            }
        }

        best
    }

    #[inline(always)]
    /// Count one more node, and poll the clock if enough nodes have passed
    /// since the last poll.
    fn increment_nodes(&mut self) {
        self.num_nodes_evaluated += 1;
        self.nodes_since_limit_update += 1;
        if self.nodes_since_limit_update >= self.config.limit_update_increment {
            self.over |= self.clock.poll(self.nodes_since_limit_update);
            self.nodes_since_limit_update = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base::Move,
        engine::{
            limit::{Callback, SearchLimit},
            window::ScoreWindow,
        },
        fens::*,
    };

    use std::cell::Cell;

    fn unwindowed() -> SearchConfig {
        SearchConfig {
            window: ScoreWindow::disabled(),
            ..SearchConfig::default()
        }
    }

    /// Plain minimax with no pruning at all, to check the results of
    /// `Searcher::negamax` against.
    fn minimax(pos: &Position, color: Color, depth: u8, ply: u16) -> Eval {
        if depth == 0 {
            return evaluate(pos, color);
        }
        let moves = scored_moves(pos, color);
        if moves.is_empty() {
            return terminal_value(pos, color, ply);
        }
        moves
            .iter()
            .map(|sm| -minimax(&pos.apply(sm.m), !color, depth - 1, ply + 1))
            .max()
            .unwrap()
    }

    fn check_against_minimax(fen: &str, depth: u8) {
        let (pos, color) = Position::from_fen(fen).unwrap();
        let config = unwindowed();
        let limit = SearchLimit::new();
        let mut searcher = Searcher::new(&config, &limit);
        assert_eq!(
            searcher.negamax(&pos, color, depth, 0, Eval::MIN, Eval::MAX),
            minimax(&pos, color, depth, 0)
        );
    }

    #[test]
    /// Test that alpha-beta pruning does not change the result of a search
    /// with a full window.
    fn alpha_beta_matches_minimax() {
        check_against_minimax(HANGING_QUEEN_FEN, 3);
        check_against_minimax(MATE_IN_1_FEN, 3);
        check_against_minimax(ENDGAME_FEN, 3);
        check_against_minimax(BOARD_START_FEN, 3);
    }

    #[test]
    /// Test that a one-ply root search gives each move its static score.
    fn depth_one_is_static() {
        let (pos, color) = Position::from_fen(HANGING_QUEEN_FEN).unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig::default();
        let limit = SearchLimit::new();
        let info = Searcher::new(&config, &limit)
            .search_root(&pos, color, &root, 1)
            .unwrap();
        for sm in &root {
            assert_eq!(info.scores[&sm.m.value()], sm.eval);
        }
    }

    #[test]
    /// Test that a two-ply search finds a mate in one, and gives it the best
    /// score of all.
    fn finds_mate_in_one() {
        let (pos, color) = Position::from_fen(MATE_IN_1_FEN).unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig::default();
        let limit = SearchLimit::new();
        let info = Searcher::new(&config, &limit)
            .search_root(&pos, color, &root, 2)
            .unwrap();
        let mate = Move::from_uci("b6b8").unwrap();
        assert_eq!(info.scores[&mate.value()], Eval::mate_in(1));
        assert_eq!(info.eval, Eval::mate_in(1));
        assert_eq!(info.depth, 2);
        for sm in &root {
            if sm.m != mate {
                assert!(info.scores[&sm.m.value()] < info.eval);
            }
        }
    }

    #[test]
    /// Test that a deeper search sees that a queen capture is defended.
    fn sees_recapture() {
        // the queen on d5 is defended by the pawn on e6
        let (pos, color) = Position::from_fen("4k3/8/4p3/3q4/8/8/3Q4/4K3 w - - 0 1").unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig::default();
        let limit = SearchLimit::new();
        let info = Searcher::new(&config, &limit)
            .search_root(&pos, color, &root, 2)
            .unwrap();
        let capture = Move::from_uci("d2d5").unwrap();
        let static_capture = root.iter().find(|sm| sm.m == capture).unwrap().eval;
        assert!(static_capture >= Eval::centipawns(800));
        assert!(info.scores[&capture.value()] < Eval::DRAW);
    }

    /// Search every root move of `fen` to `depth` with the given window,
    /// returning the best score and the number of nodes visited.
    fn root_search_with(fen: &str, depth: u8, window: ScoreWindow) -> (Eval, u64) {
        let (pos, color) = Position::from_fen(fen).unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig {
            window,
            ..SearchConfig::default()
        };
        let limit = SearchLimit::new();
        let mut searcher = Searcher::new(&config, &limit);
        let info = searcher.search_root(&pos, color, &root, depth).unwrap();
        (info.eval, searcher.num_nodes_evaluated())
    }

    #[test]
    /// Test that the score window stops a node once its best score falls far
    /// below every static score of its moves.
    ///
    /// After 1. Qd3, each of Black's moves scores +100 statically, but the
    /// first one searched, ...Qd6, loses the queen to Qxd6. That is more than
    /// the 600 centipawn band below the worst static score, so Black's node
    /// stops there and 1. Qd3 is scored as winning a queen.
    fn window_cuts_off_node() {
        let fen = "4k3/8/4p3/3q4/8/8/3Q4/4K3 w - - 0 1";
        let (windowed_eval, windowed_nodes) = root_search_with(fen, 3, ScoreWindow::default());
        let (plain_eval, plain_nodes) = root_search_with(fen, 3, ScoreWindow::disabled());

        assert_eq!(plain_eval, Eval::centipawns(-100));
        assert_eq!(windowed_eval, Eval::centipawns(800));
        assert!(windowed_nodes < plain_nodes);
    }

    #[test]
    /// Test that the threshold for nodes with no depth left is never used,
    /// since those nodes are always evaluated statically.
    fn window_skips_depth_zero_entry() {
        let mut thresholds = ScoreWindow::DEFAULT_THRESHOLDS;
        thresholds[0] = Eval::DRAW;
        let shifted = ScoreWindow::new(thresholds);
        for (fen, depth) in [
            ("4k3/8/4p3/3q4/8/8/3Q4/4K3 w - - 0 1", 3),
            (KIWIPETE_NO_CASTLE_FEN, 3),
            (HANGING_QUEEN_FEN, 4),
        ] {
            assert_eq!(
                root_search_with(fen, depth, shifted),
                root_search_with(fen, depth, ScoreWindow::default())
            );
        }
    }

    #[test]
    /// Test that once the turn is over, no more siblings are searched: the
    /// node which saw the clock expire is the last one visited.
    fn stops_visiting_after_timeout() {
        let (pos, color) = Position::from_fen(BOARD_START_FEN).unwrap();
        let config = SearchConfig {
            limit_update_increment: 1,
            ..SearchConfig::default()
        };
        let polls = Cell::new(0);
        let clock = Callback(|| {
            polls.set(polls.get() + 1);
            polls.get() >= 20
        });
        let mut searcher = Searcher::new(&config, &clock);
        searcher.negamax(&pos, color, 4, 0, Eval::MIN, Eval::MAX);
        assert!(searcher.is_over());
        assert_eq!(searcher.num_nodes_evaluated(), 20);
    }

    #[test]
    /// Test that a search whose turn is already over reports a timeout.
    fn timeout() {
        let (pos, color) = Position::from_fen(BOARD_START_FEN).unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig {
            limit_update_increment: 1,
            ..SearchConfig::default()
        };
        let clock = Callback(|| true);
        let mut searcher = Searcher::new(&config, &clock);
        assert_eq!(
            searcher.search_root(&pos, color, &root, 3),
            Err(SearchError::Timeout)
        );
        assert!(searcher.is_over());
    }

    #[test]
    /// Test that the turn ending partway through a search discards it.
    fn timeout_midway() {
        let (pos, color) = Position::from_fen(BOARD_START_FEN).unwrap();
        let root = scored_moves(&pos, color);
        let config = SearchConfig {
            limit_update_increment: 1,
            ..SearchConfig::default()
        };
        let limit = SearchLimit::with_nodes(50);
        limit.start().unwrap();
        let mut searcher = Searcher::new(&config, &limit);
        assert_eq!(
            searcher.search_root(&pos, color, &root, 4),
            Err(SearchError::Timeout)
        );
        assert!(searcher.num_nodes_evaluated() > 50);
    }
}
