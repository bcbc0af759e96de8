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

//! A command-line driver for Snare.
//!
//! # Arguments
//!
//! The first argument picks a mode:
//! 1. `perft <depth> [fen]`: count the leaves of the move tree.
//! 1. `best <millis> [fen]`: choose one move with the given time budget.
//! 1. `play <millis> [max-plies]`: play a game against itself from the start
//!    position.
//!
//! Positions default to the start position with White to move.

#![warn(clippy::pedantic)]

use std::{env, process::ExitCode, sync::Arc, time::Duration};

use snare::{
    base::{perft::perft, Color, Position},
    cli::play_game,
    engine::{limit::SearchLimit, Player},
};

/// The number of plies after which a self-played game is called off.
const DEFAULT_MAX_PLIES: usize = 200;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("perft") => run_perft(&args[1..]),
        Some("best") => run_best(&args[1..]),
        Some("play") => run_play(&args[1..]),
        _ => Err("missing mode".into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: snare perft <depth> [fen]");
            eprintln!("       snare best <millis> [fen]");
            eprintln!("       snare play <millis> [max-plies]");
            ExitCode::FAILURE
        }
    }
}

/// Load the position given by the FEN in `args`, which may be split across
/// several arguments, or the start position if there is none.
fn load_position(args: &[String]) -> Result<(Position, Color), String> {
    if args.is_empty() {
        Ok((Position::default(), Color::White))
    } else {
        Position::from_fen(&args.join(" "))
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], name: &str) -> Result<T, String> {
    args.first()
        .ok_or_else(|| format!("no {name} given"))?
        .parse()
        .map_err(|_| format!("could not parse {name}"))
}

fn run_perft(args: &[String]) -> Result<(), String> {
    let depth: u8 = parse_arg(args, "depth")?;
    let (pos, color) = load_position(&args[1..])?;
    println!("{pos}");
    let tic = std::time::Instant::now();
    let num_nodes = perft(&pos, color, depth);
    let elapsed = tic.elapsed();
    println!(
        "depth {depth}: {num_nodes} nodes in {}ms ({} nodes/sec)",
        elapsed.as_millis(),
        num_nodes * 1000 / (elapsed.as_millis() as u64 + 1)
    );
    Ok(())
}

fn player_with_budget(millis: u64) -> Player {
    let mut player = Player::new();
    player.limit = Arc::new(SearchLimit::with_duration(Duration::from_millis(millis)));
    player.log_to_stdout();
    player
}

fn run_best(args: &[String]) -> Result<(), String> {
    let millis: u64 = parse_arg(args, "time budget")?;
    let (pos, color) = load_position(&args[1..])?;
    let mut player = player_with_budget(millis);
    let sm = player.choose_move(&pos, color);
    println!("bestmove {} ({sm})", sm.m.to_uci());
    Ok(())
}

fn run_play(args: &[String]) -> Result<(), String> {
    let millis: u64 = parse_arg(args, "time budget")?;
    let max_plies = match args.get(1) {
        Some(s) => s
            .parse()
            .map_err(|_| "could not parse ply cap".to_string())?,
        None => DEFAULT_MAX_PLIES,
    };
    let mut white = player_with_budget(millis);
    let mut black = player_with_budget(millis);
    let record = play_game(
        &mut white,
        &mut black,
        Position::default(),
        Color::White,
        max_plies,
    );

    for (i, sm) in record.moves.iter().enumerate() {
        if i % 2 == 0 {
            print!("{}. ", i / 2 + 1);
        }
        println!("{}", sm.m.to_uci());
    }
    println!("{}", record.final_position);
    println!("{}", record.result);
    Ok(())
}
