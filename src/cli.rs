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

//! A harness for playing two players against each other.
//!
//! Each player checks the other's moves before accepting them, the same way a
//! host program would check an opponent it does not trust.

use crate::{
    base::{movegen, Color, MoveFlag, Position, ScoredMove},
    engine::Player,
};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The way a game ended.
pub enum GameResult {
    /// `winner` checkmated the other side.
    Checkmate { winner: Color },
    /// The side to move had no legal moves, but was not in check.
    Stalemate,
    /// The game reached its maximum number of plies.
    PlyCap,
    /// `color` played a move which its opponent rejected as illegal.
    Rejected { color: Color },
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameResult::Stalemate => write!(f, "draw by stalemate"),
            GameResult::PlyCap => write!(f, "unfinished after the ply cap"),
            GameResult::Rejected { color } => write!(f, "{color} played an illegal move"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything that happened in one game.
pub struct GameRecord {
    /// The moves played, in order.
    pub moves: Vec<ScoredMove>,
    /// How the game ended.
    pub result: GameResult,
    /// The position when the game ended.
    pub final_position: Position,
    /// The side to move in the final position.
    pub to_move: Color,
}

/// Play a game between `white` and `black` from `start`, with `first` to
/// move. The game ends on checkmate or stalemate, when a player's move is
/// rejected by its opponent, or after `max_plies` plies.
pub fn play_game(
    white: &mut Player,
    black: &mut Player,
    start: Position,
    first: Color,
    max_plies: usize,
) -> GameRecord {
    let mut pos = start;
    let mut to_move = first;
    let mut moves = Vec::new();

    let result = loop {
        if moves.len() >= max_plies {
            break GameResult::PlyCap;
        }
        let (mover, opponent) = match to_move {
            Color::White => (&mut *white, &*black),
            Color::Black => (&mut *black, &*white),
        };
        let sm = mover.choose_move(&pos, to_move);
        if sm.m.is_null() {
            // the mover was left without moves by the previous ply
            break match movegen::outcome(&pos, to_move) {
                movegen::Outcome::Checkmate => GameResult::Checkmate { winner: !to_move },
                _ => GameResult::Stalemate,
            };
        }
        if !opponent.validate_opponent_move(&pos, sm.m, to_move) {
            break GameResult::Rejected { color: to_move };
        }

        pos = pos.apply(sm.m);
        moves.push(sm);
        to_move = !to_move;
        match sm.flag {
            MoveFlag::Checkmate => break GameResult::Checkmate { winner: !to_move },
            MoveFlag::Stalemate => break GameResult::Stalemate,
            _ => (),
        }
    };

    GameRecord {
        moves,
        result,
        final_position: pos,
        to_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base::{Move, Piece},
        engine::limit::SearchLimit,
        fens::*,
    };

    use std::sync::Arc;

    fn shallow_player(seed: u64) -> Player {
        let mut player = Player::with_seed(seed);
        player.config.max_depth = 2;
        player.limit = Arc::new(SearchLimit::new());
        player
    }

    #[test]
    /// Test that a short game between shallow players stays legal, with each
    /// side keeping its king.
    fn short_game() {
        let mut white = shallow_player(1);
        let mut black = shallow_player(2);
        let record = play_game(&mut white, &mut black, Position::default(), Color::White, 12);

        assert!(!matches!(record.result, GameResult::Rejected { .. }));
        assert!(record.moves.len() <= 12);
        let mut pos = Position::default();
        let mut color = Color::White;
        for sm in &record.moves {
            assert!(movegen::is_legal(&pos, color, sm.m));
            pos = pos.apply(sm.m);
            color = !color;
        }
        assert_eq!(pos, record.final_position);
        for color in Color::ALL {
            assert!(pos.king_square(color).is_some());
        }
    }

    #[test]
    /// Test that a game from a mate in one ends immediately with a win.
    fn game_ends_in_mate() {
        let mut white = shallow_player(3);
        let mut black = shallow_player(4);
        let (start, first) = Position::from_fen(MATE_IN_1_FEN).unwrap();
        let record = play_game(&mut white, &mut black, start, first, 10);

        assert_eq!(
            record.result,
            GameResult::Checkmate {
                winner: Color::White
            }
        );
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.moves[0].m, Move::from_uci("b6b8").unwrap());
        assert_eq!(record.to_move, Color::Black);
        assert_eq!(
            movegen::outcome(&record.final_position, Color::Black),
            movegen::Outcome::Checkmate
        );
    }

    #[test]
    /// Test that a game starting from a stalemate ends without any moves.
    fn game_starts_stalemated() {
        let mut white = shallow_player(5);
        let mut black = shallow_player(6);
        let (start, first) = Position::from_fen(STALEMATE_FEN).unwrap();
        let record = play_game(&mut white, &mut black, start, first, 10);

        assert_eq!(record.result, GameResult::Stalemate);
        assert!(record.moves.is_empty());
        assert_eq!(record.to_move, Color::Black);
    }

    #[test]
    /// Test that a promotion is played and recorded as a queen.
    fn promotes_to_queen() {
        let mut white = shallow_player(7);
        let mut black = shallow_player(8);
        let (start, first) = Position::from_fen(WHITE_READY_TO_PROMOTE_FEN).unwrap();
        let record = play_game(&mut white, &mut black, start, first, 1);

        assert_eq!(record.result, GameResult::PlyCap);
        assert_eq!(record.moves[0].m, Move::from_uci("f7f8").unwrap());
        let queen_square = record.moves[0].m.to_square();
        assert_eq!(
            record.final_position[queen_square].map(|occ| occ.piece),
            Some(Piece::Queen)
        );
    }
}
