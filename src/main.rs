//! Nanago demo binary.
//!
//! A small driver around the engine library, useful for eyeballing its
//! play. The engine itself has no CLI surface; this binary stands in for
//! the presentation layer.
//!
//! ## Usage
//!
//! - `nanago` - Play a short engine-vs-engine demo game
//! - `nanago demo --moves 30` - Same, with a custom move budget

use anyhow::Result;
use clap::{Parser, Subcommand};

use nanago::advisor::situation_analysis;
use nanago::board::{Board, Color};
use nanago::constants::DEFAULT_SIZE;
use nanago::rules::try_move;
use nanago::score::{calculate_score, Captures, DeadStones};
use nanago::search::best_move;

/// Nanago: a 7x7 Go engine
#[derive(Parser)]
#[command(name = "nanago")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an engine-vs-engine demo game and print the result
    Demo {
        /// Maximum number of moves to play
        #[arg(long, default_value_t = 20)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { moves }) => run_demo(moves),
        None => run_demo(20),
    }
}

fn run_demo(max_moves: usize) -> Result<()> {
    println!("Nanago: 7x7 Go engine self-play demo\n");

    let mut board = Board::new(DEFAULT_SIZE);
    let mut previous: Option<Board> = None;
    let mut captures = Captures::new();
    let mut turn = Color::Black;
    let mut last_move = None;
    let mut passes = 0;
    let mut move_count = 0;

    while move_count < max_moves && passes < 2 {
        match best_move(&board, turn, previous.as_ref()) {
            Some((x, y)) => {
                let result = try_move(&board, x, y, turn, previous.as_ref());
                let Some(next) = result.board else {
                    // The search only proposes legal moves; treat a
                    // rejection as a pass to stay safe.
                    passes += 1;
                    turn = turn.opponent();
                    continue;
                };
                captures.credit(turn, result.captured);
                previous = Some(std::mem::replace(&mut board, next));
                println!(
                    "{:>2}. {:?} plays ({x}, {y}){}",
                    move_count + 1,
                    turn,
                    if result.captured > 0 {
                        format!(", capturing {}", result.captured)
                    } else {
                        String::new()
                    }
                );
                last_move = Some((x, y));
                passes = 0;
            }
            None => {
                println!("{:>2}. {:?} passes", move_count + 1, turn);
                passes += 1;
            }
        }
        turn = turn.opponent();
        move_count += 1;
    }

    println!("\n{board}");

    let score = calculate_score(&board, &DeadStones::new(board.size), &captures);
    println!("Score: Black {:.1} - White {:.1}", score.black, score.white);

    if let Some(analysis) = situation_analysis(&board, &captures, turn, last_move, move_count) {
        println!("\n{}", analysis.summary);
        for advice in &analysis.recommendations {
            println!("  try ({}, {}): {}", advice.point.0, advice.point.1, advice.reason);
        }
        for advice in &analysis.warnings {
            println!("  avoid ({}, {}): {}", advice.point.0, advice.point.1, advice.reason);
        }
    }

    Ok(())
}
