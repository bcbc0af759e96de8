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

//! Lookup tables of the squares reachable from every square.
//!
//! The tables are built on first use and shared for the life of the program.

use super::{Direction, Square};

use once_cell::sync::Lazy;

/// The squares along each queen ray from each square, nearest first.
/// Indexed first by square, then by position in `Direction::QUEEN_DIRECTIONS`.
pub static RAYS: Lazy<[[Vec<Square>; 8]; Square::NUM]> = Lazy::new(|| {
    let mut rays: [[Vec<Square>; 8]; Square::NUM] =
        std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));
    for sq in Square::all() {
        for (ray, dir) in rays[sq.index()]
            .iter_mut()
            .zip(Direction::QUEEN_DIRECTIONS)
        {
            let mut current = sq;
            while let Some(next) = current.offset(dir) {
                ray.push(next);
                current = next;
            }
        }
    }
    rays
});

/// The squares a knight on each square attacks.
pub static KNIGHT_HOPS: Lazy<[Vec<Square>; Square::NUM]> =
    Lazy::new(|| create_step_table(&Direction::KNIGHT_STEPS));

/// Create a table of the squares reachable by one of the given steps.
fn create_step_table(steps: &[Direction]) -> [Vec<Square>; Square::NUM] {
    std::array::from_fn(|i| match Square::from_index(i) {
        Some(sq) => steps.iter().filter_map(|&dir| sq.offset(dir)).collect(),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    /// Test that a corner knight has two hops and a central one has eight.
    fn knight_hops() {
        assert_eq!(KNIGHT_HOPS[sq("a1").index()].len(), 2);
        assert_eq!(KNIGHT_HOPS[sq("e4").index()].len(), 8);
        assert!(KNIGHT_HOPS[sq("g1").index()].contains(&sq("f3")));
    }

    #[test]
    /// Test that rays run to the edge of the board, nearest square first.
    fn rays_reach_edge() {
        let north_of_a1 = &RAYS[sq("a1").index()][0];
        assert_eq!(north_of_a1.len(), 7);
        assert_eq!(north_of_a1[0], sq("a2"));
        assert_eq!(north_of_a1[6], sq("a8"));

        // east, then southeast from h4 leave the board immediately
        assert!(RAYS[sq("h4").index()][2].is_empty());
        assert!(RAYS[sq("h4").index()][3].is_empty());
        assert_eq!(RAYS[sq("h4").index()][5], vec![sq("g3"), sq("f2"), sq("e1")]);
    }
}
