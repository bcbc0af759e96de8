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

/// The FEN of the starting position.
pub const BOARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A rook and pawn endgame used for perft.
pub const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

/// The "Kiwipete" perft position, with castling rights removed.
pub const KIWIPETE_NO_CASTLE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1";

/// A board where White is ready to promote the f7-pawn.
pub const WHITE_READY_TO_PROMOTE_FEN: &str = "8/5P2/2k5/4K3/8/8/8/8 w - - 0 1";

/// A board where White can mate in 1 with Rb8#.
pub const MATE_IN_1_FEN: &str = "3k4/R7/1R6/5K2/8/8/8/8 w - - 0 1";

/// The position in a game immediately after White has pulled off Scholar's Mate.
pub const SCHOLARS_MATE_FEN: &str =
    "rnbqk2r/pppp1Qpp/5n2/2b1p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";

/// White is ready to capture the pawn on f5 with exf5.
pub const PAWN_CAPTURE_FEN: &str = "rnbqkbnr/ppppp1pp/8/5p2/4P3/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 2";

/// A board where a pawn is checking a king.
pub const PAWN_CHECKING_KING_FEN: &str =
    "r1bq1b1r/ppp2kpp/2n5/3n4/2B5/8/PPP1pPPP/RN1Q1K1R w - - 0 10";

/// A board where the black queen on e2 has mated White's king.
pub const WHITE_MATED_FEN: &str = "r1b2b1r/ppp2kpp/8/4p3/3n4/2Q5/PP1PqPPP/RNB1K2R w KQ - 4 11";

/// A FEN where the Black king has only one legal move (Kb8).
pub const KING_HAS_ONE_MOVE_FEN: &str = "2k5/4R3/8/5K2/3R4/8/8/8 b - - 2 2";

/// Black, to move, has been stalemated in the corner.
pub const STALEMATE_FEN: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

/// White can win Black's undefended queen with the knight.
pub const HANGING_QUEEN_FEN: &str = "4k3/8/3q4/8/4N3/8/8/4K3 w - - 0 1";

/// White can stalemate Black with Qf7, or mate with Qg7.
pub const STALEMATE_TRAP_FEN: &str = "7k/8/5QK1/8/8/8/8/8 w - - 0 1";
