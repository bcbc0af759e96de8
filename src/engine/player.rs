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

//! The player, which decides on one move per turn.
//!
//! A decision starts from the static score of every legal move, then searches
//! the moves again at increasing depths for as long as the turn clock allows.
//! Only depths which finish searching every move replace the scores of the
//! previous depth.

use crate::base::{movegen, Color, Eval, Move, MoveFlag, Position, ScoredMove};

use super::{
    config::SearchConfig,
    evaluate::scored_moves,
    info::{EngineInfo, InfoLine},
    limit::{SearchLimit, TurnClock},
    search::Searcher,
};

use nohash_hasher::IntMap;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// A sink for the progress reports of a player.
pub type LogSink = Box<dyn FnMut(&str) + Send>;

/// A chess player, which keeps its configuration and a time limit between
/// turns.
pub struct Player {
    /// The configuration for each decision.
    pub config: SearchConfig,
    /// The limit used by `choose_move`. It is restarted at every decision.
    pub limit: Arc<SearchLimit>,
    /// The score of each root move in the most recent decision, keyed by
    /// `Move::value`.
    root_scores: IntMap<u16, Eval>,
    /// The source of randomness for breaking ties between equal moves.
    rng: fastrand::Rng,
    /// Where progress reports go. Reports are dropped if there is no sink.
    log: Option<LogSink>,
}

impl Player {
    /// The time given to each decision by `Player::new`.
    pub const DEFAULT_TURN_TIME: Duration = Duration::from_secs(1);

    /// Construct a new player with the default configuration, which takes
    /// `DEFAULT_TURN_TIME` to decide on each move.
    pub fn new() -> Player {
        Player::with_rng(fastrand::Rng::new())
    }

    /// Construct a new player whose tie-breaking is determined by `seed`.
    pub fn with_seed(seed: u64) -> Player {
        Player::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Player {
        Player {
            config: SearchConfig::default(),
            limit: Arc::new(SearchLimit::with_duration(Player::DEFAULT_TURN_TIME)),
            root_scores: IntMap::default(),
            rng,
            log: None,
        }
    }

    /// Send progress reports to `sink`, one line per call.
    pub fn set_log(&mut self, sink: impl FnMut(&str) + Send + 'static) {
        self.log = Some(Box::new(sink));
    }

    /// Print progress reports to standard output.
    pub fn log_to_stdout(&mut self) {
        self.set_log(|line| println!("{line}"));
    }

    /// Get the scores given to each root move by the most recent decision.
    pub fn root_scores(&self) -> &IntMap<u16, Eval> {
        &self.root_scores
    }

    /// Choose a move for `color` to play in `pos`, bounded by this player's
    /// `limit`.
    pub fn choose_move(&mut self, pos: &Position, color: Color) -> ScoredMove {
        let limit = Arc::clone(&self.limit);
        self.choose_move_with(pos, color, limit.as_ref())
    }

    /// Choose a move for `color` to play in `pos`, searching until `clock`
    /// says the turn is over or the maximum depth is reached.
    ///
    /// If `color` has no legal moves, the result is `ScoredMove::STALEMATE`.
    /// Otherwise the result is one of the legal moves with the best score,
    /// chosen at random among ties, and flagged `Checkmate` or `Stalemate`
    /// if it leaves the opponent with no reply.
    pub fn choose_move_with<C: TurnClock + ?Sized>(
        &mut self,
        pos: &Position,
        color: Color,
        clock: &C,
    ) -> ScoredMove {
        self.root_scores.clear();
        if let Err(e) = clock.start() {
            self.emit(&InfoLine(&[EngineInfo::String(&e.to_string())]).to_string());
        }

        let root = scored_moves(pos, color);
        if root.is_empty() {
            return ScoredMove::STALEMATE;
        }
        for sm in &root {
            self.root_scores.insert(sm.m.value(), sm.eval);
        }

        let tic = Instant::now();
        let config = self.config;
        let mut searcher = Searcher::new(&config, clock);
        for depth in config.start_depth.max(2)..=config.max_depth {
            match searcher.search_root(pos, color, &root, depth) {
                Ok(info) => {
                    self.root_scores = info.scores;
                    let best_move = root
                        .iter()
                        .find(|sm| self.score_of(sm) == info.eval)
                        .map_or(root[0].m, |sm| sm.m);
                    let elapsed = tic.elapsed();
                    let nodes = searcher.num_nodes_evaluated();
                    let speed = nodes * 1000 / (elapsed.as_millis() as u64 + 1);
                    self.emit(
                        &InfoLine(&[
                            EngineInfo::Depth(depth),
                            EngineInfo::Time(elapsed),
                            EngineInfo::Nodes(nodes),
                            EngineInfo::NodeSpeed(speed),
                            EngineInfo::Score(info.eval),
                            EngineInfo::Pv(&[best_move]),
                        ])
                        .to_string(),
                    );
                }
                Err(_) => break,
            }
        }

        let best = root
            .iter()
            .map(|sm| self.score_of(sm))
            .max()
            .unwrap_or(Eval::MIN);
        let candidates: Vec<ScoredMove> = root
            .iter()
            .filter(|sm| self.score_of(sm) == best)
            .copied()
            .collect();
        // nonempty, since `best` is the score of some root move
        let chosen = candidates[self.rng.usize(..candidates.len())];

        let flag = if movegen::has_moves(&pos.apply(chosen.m), !color) {
            chosen.flag
        } else if chosen.flag == MoveFlag::Check {
            MoveFlag::Checkmate
        } else {
            MoveFlag::Stalemate
        };

        ScoredMove {
            m: chosen.m,
            flag,
            eval: best,
        }
    }

    /// Determine whether `m` is a legal move for `color` in `before`.
    pub fn validate_opponent_move(&self, before: &Position, m: Move, color: Color) -> bool {
        movegen::is_legal(before, color, m)
    }

    #[inline(always)]
    /// Get the current score of a root move.
    fn score_of(&self, sm: &ScoredMove) -> Eval {
        self.root_scores
            .get(&sm.m.value())
            .copied()
            .unwrap_or(sm.eval)
    }

    /// Write one line to the log sink, if there is one.
    fn emit(&mut self, line: &str) {
        if let Some(log) = self.log.as_mut() {
            log(line);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}
