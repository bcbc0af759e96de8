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

//! Positions, which are immutable snapshots of the 64 cells of a board.

use super::{Color, Move, Occupant, Piece, Square};

use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A snapshot of a board.
/// A `Position` is never changed in place once built: making a move yields a
/// new `Position`.
pub struct Position {
    /// The occupant of each square, indexed by `Square::index`.
    cells: [Option<Occupant>; Square::NUM],
}

impl Position {
    /// The symbols for the starting position, in index order (rank 1 first).
    pub const START_SYMBOLS: &'static str =
        "RNBQKBNR/PPPPPPPP/________/________/________/________/pppppppp/rnbqkbnr";

    /// A board with nothing on it.
    pub const EMPTY: Position = Position {
        cells: [None; Square::NUM],
    };

    /// Construct a position from its 64-symbol encoding.
    /// Symbols are read in index order, so the first eight describe rank 1
    /// from the a-file to the h-file.
    /// Uppercase `PNBRQK` are White pieces, lowercase are Black pieces, and
    /// `_` is an empty square. Any `/` characters are row separators and are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Will return an error if there are not exactly 64 symbols or a symbol
    /// is not recognized.
    pub fn from_symbols(symbols: &str) -> Result<Position, String> {
        let mut cells = [None; Square::NUM];
        let mut i = 0;
        for c in symbols.chars().filter(|&c| c != '/') {
            if i >= Square::NUM {
                return Err(format!("too many symbols in {symbols:?}"));
            }
            cells[i] = match c {
                '_' => None,
                _ => Some(
                    Occupant::from_code(c).ok_or_else(|| format!("unrecognized symbol {c:?}"))?,
                ),
            };
            i += 1;
        }
        if i != Square::NUM {
            return Err(format!("expected 64 symbols, found {i}"));
        }

        Ok(Position { cells })
    }

    /// Get the 64-symbol encoding of this position, with a `/` between ranks.
    /// This is the inverse of `Position::from_symbols`.
    pub fn to_symbols(&self) -> String {
        let mut s = String::with_capacity(71);
        for sq in Square::all() {
            if sq.x() == 0 && sq.y() != 0 {
                s.push('/');
            }
            s.push(self[sq].map_or('_', Occupant::code));
        }
        s
    }

    /// Construct a position from the board and side-to-move fields of a FEN
    /// string. The castling, en passant, and move-count fields are accepted
    /// but ignored.
    ///
    /// # Errors
    ///
    /// Will return an error if the board or the side to move is malformed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fen(fen: &str) -> Result<(Position, Color), String> {
        let mut fields = fen.split_whitespace();
        let board = fields.next().ok_or("empty FEN")?;
        let mut cells = [None; Square::NUM];

        let rows: Vec<&str> = board.split('/').collect();
        if rows.len() != 8 {
            return Err(format!("expected 8 ranks, found {}", rows.len()));
        }
        // FEN lists rank 8 first
        for (row, y) in rows.iter().zip((0..8u8).rev()) {
            let mut x = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    x = x.saturating_add(skip as u8);
                    continue;
                }
                let occupant =
                    Occupant::from_code(c).ok_or_else(|| format!("unrecognized piece {c:?}"))?;
                let sq = Square::new(x, y).ok_or_else(|| format!("rank {row:?} is too long"))?;
                cells[sq.index()] = Some(occupant);
                x += 1;
            }
            if x != 8 {
                return Err(format!("rank {row:?} does not have 8 squares"));
            }
        }

        let color = match fields.next() {
            Some("w") | None => Color::White,
            Some("b") => Color::Black,
            Some(s) => return Err(format!("unrecognized side to move {s:?}")),
        };

        Ok((Position { cells }, color))
    }

    #[must_use]
    /// Get the position which results from making a move.
    /// The piece on the from-square is copied to the to-square, replacing
    /// anything there, and the from-square is emptied. A pawn which arrives
    /// on its promotion rank becomes a queen.
    /// No legality check is made, and moving from an empty square simply
    /// empties the to-square.
    pub fn apply(&self, m: Move) -> Position {
        if m.is_null() {
            return *self;
        }
        let from = m.from_square();
        let to = m.to_square();
        let mut next = *self;
        next.cells[to.index()] = match self[from] {
            Some(Occupant {
                color,
                piece: Piece::Pawn,
            }) if to.y() == color.promote_rank() => Some(Occupant::new(color, Piece::Queen)),
            occupant => occupant,
        };
        next.cells[from.index()] = None;
        next
    }

    /// Iterate over every occupied square of the given color, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self[sq] {
            Some(occ) if occ.color == color => Some((sq, occ.piece)),
            _ => None,
        })
    }

    /// Find the king of the given color, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, pt)| pt == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Index<Square> for Position {
    type Output = Option<Occupant>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Option<Occupant> {
        &self.cells[sq.index()]
    }
}

impl Default for Position {
    fn default() -> Position {
        let mut cells = [None; Square::NUM];
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (x, pt) in back_rank.into_iter().enumerate() {
            cells[x] = Some(Occupant::new(Color::White, pt));
            cells[x + 8] = Some(Occupant::new(Color::White, Piece::Pawn));
            cells[x + 48] = Some(Occupant::new(Color::Black, Piece::Pawn));
            cells[x + 56] = Some(Occupant::new(Color::Black, pt));
        }
        Position { cells }
    }
}

impl Display for Position {
    /// Display this position as a grid, rank 8 at the top.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                let c = Square::new(x, y)
                    .and_then(|sq| self[sq])
                    .map_or('.', Occupant::code);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    /// Test that the start position can be read from both encodings.
    fn start_position_encodings() {
        let from_symbols = Position::from_symbols(Position::START_SYMBOLS).unwrap();
        let (from_fen, color) =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .unwrap();
        assert_eq!(from_symbols, Position::default());
        assert_eq!(from_fen, Position::default());
        assert_eq!(color, Color::White);
        assert_eq!(from_symbols.to_symbols(), Position::START_SYMBOLS);
    }

    #[test]
    /// Test that the separators in the symbol encoding are optional.
    fn symbols_without_separators() {
        let compact: String = Position::START_SYMBOLS
            .chars()
            .filter(|&c| c != '/')
            .collect();
        assert_eq!(
            Position::from_symbols(&compact).unwrap(),
            Position::default()
        );
    }

    #[test]
    /// Test that malformed encodings are rejected.
    fn bad_encodings() {
        assert!(Position::from_symbols("RNBQKBNR").is_err());
        assert!(Position::from_symbols(&"_".repeat(65)).is_err());
        assert!(Position::from_symbols(&"x".repeat(64)).is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8 w").is_err());
        assert!(Position::from_fen("9/8/8/8/8/8/8/8 w").is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8/8 x").is_err());
    }

    #[test]
    /// Test that the white back rank is at index 0.
    fn orientation() {
        let pos = Position::default();
        assert_eq!(
            pos[sq("e1")],
            Some(Occupant::new(Color::White, Piece::King))
        );
        assert_eq!(pos[sq("d8")], Some(Occupant::new(Color::Black, Piece::Queen)));
        assert_eq!(pos[sq("a2")], Some(Occupant::new(Color::White, Piece::Pawn)));
        assert_eq!(pos[sq("e4")], None);
        assert_eq!(pos.king_square(Color::Black), Some(sq("e8")));
    }

    #[test]
    /// Test that applying a move does not change the original position.
    fn apply_is_pure() {
        let pos = Position::default();
        let next = pos.apply(Move::new(sq("e2"), sq("e4")));
        assert_eq!(pos, Position::default());
        assert_eq!(next[sq("e2")], None);
        assert_eq!(next[sq("e4")], Some(Occupant::new(Color::White, Piece::Pawn)));
    }

    #[test]
    /// Test that a capture replaces the captured piece.
    fn apply_capture() {
        let (pos, _) = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let next = pos.apply(Move::new(sq("e4"), sq("d5")));
        assert_eq!(next[sq("d5")], Some(Occupant::new(Color::White, Piece::Pawn)));
        assert_eq!(next.pieces_of(Color::Black).count(), 1);
    }

    #[test]
    /// Test that pawns of both colors promote to queens on their last rank.
    fn apply_promotion() {
        let (pos, _) = Position::from_fen("4k3/1P6/8/8/8/8/6p1/4K3 w - - 0 1").unwrap();
        let white = pos.apply(Move::new(sq("b7"), sq("b8")));
        assert_eq!(white[sq("b8")], Some(Occupant::new(Color::White, Piece::Queen)));
        let black = white.apply(Move::new(sq("g2"), sq("g1")));
        assert_eq!(black[sq("g1")], Some(Occupant::new(Color::Black, Piece::Queen)));
    }

    #[test]
    /// Test that moving from an empty square empties the target.
    fn apply_from_empty() {
        let pos = Position::default();
        let next = pos.apply(Move::new(sq("e4"), sq("e2")));
        assert_eq!(next[sq("e2")], None);
        assert_eq!(next[sq("e4")], None);
    }

    #[test]
    fn display() {
        let text = format!("{}", Position::default());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "rnbqkbnr");
        assert_eq!(text.lines().count(), 8);
    }
}
