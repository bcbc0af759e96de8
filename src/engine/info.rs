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

//! Progress reports written by the engine while it searches.
//! Reports use the layout of UCI `info` lines, so they can be read by tools
//! which already understand that format.

use crate::base::{Eval, Move};

use std::{fmt, time::Duration};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One fact about the state of a search.
pub enum EngineInfo<'a> {
    /// The depth to which this information was created.
    Depth(u8),
    /// The time searched.
    Time(Duration),
    /// The number of nodes searched.
    Nodes(u64),
    /// The number of nodes searched per second by the engine.
    NodeSpeed(u64),
    /// The evaluation of the position, from the engine's point of view.
    Score(Eval),
    /// The line the engine expects to be played.
    Pv(&'a [Move]),
    /// Any string. The string may not contain any newlines (`\n`).
    String(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A full report, made of several facts.
pub struct InfoLine<'a>(pub &'a [EngineInfo<'a>]);

impl fmt::Display for InfoLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut new_line = false;
        write!(f, "info")?;
        for info in self.0 {
            if new_line {
                write!(f, "\ninfo")?;
                new_line = false;
            }
            match info {
                EngineInfo::Depth(depth) => write!(f, " depth {depth}")?,
                EngineInfo::Time(t) => write!(f, " time {}", t.as_millis())?,
                EngineInfo::Nodes(n) => write!(f, " nodes {n}")?,
                EngineInfo::NodeSpeed(speed) => write!(f, " nps {speed}")?,
                EngineInfo::Score(eval) => {
                    write!(f, " score ")?;
                    match eval.plies_to_mate() {
                        Some(plies) => {
                            // UCI counts mates in moves, not plies
                            let moves = (plies + 1) / 2;
                            if *eval > Eval::DRAW {
                                write!(f, "mate {moves}")?;
                            } else {
                                write!(f, "mate -{moves}")?;
                            }
                        }
                        None => write!(f, "cp {}", eval.centipawn_val())?,
                    };
                }
                EngineInfo::Pv(pv) => {
                    write!(f, " pv")?;
                    for m in pv.iter() {
                        write!(f, " {}", m.to_uci())?;
                    }
                }
                // a string runs to the end of its line
                EngineInfo::String(s) => {
                    write!(f, " string {s}")?;
                    new_line = true;
                }
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test a report of a completed depth.
    fn info_depth_report() {
        let pv = [Move::from_uci("e2e4").unwrap()];
        assert_eq!(
            format!(
                "{}",
                InfoLine(&[
                    EngineInfo::Depth(3),
                    EngineInfo::Time(Duration::from_millis(1242)),
                    EngineInfo::Nodes(2124),
                    EngineInfo::NodeSpeed(1710),
                    EngineInfo::Score(Eval::centipawns(35)),
                    EngineInfo::Pv(&pv),
                ])
            ),
            "info depth 3 time 1242 nodes 2124 nps 1710 score cp 35 pv e2e4"
        );
    }

    #[test]
    /// Test that mates are reported in moves.
    fn info_mate() {
        assert_eq!(
            format!("{}", InfoLine(&[EngineInfo::Score(Eval::mate_in(3))])),
            "info score mate 2"
        );
        assert_eq!(
            format!("{}", InfoLine(&[EngineInfo::Score(-Eval::mate_in(2))])),
            "info score mate -1"
        );
    }

    #[test]
    /// Test that anything after a string goes on a new line.
    fn info_string_split() {
        assert_eq!(
            format!(
                "{}",
                InfoLine(&[EngineInfo::String("hello"), EngineInfo::Depth(1)])
            ),
            "info string hello\ninfo depth 1"
        );
    }
}
