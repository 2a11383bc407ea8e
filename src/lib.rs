//! Nanago: rules and an adversarial opponent for small-board (7x7) Go.
//!
//! The engine is a set of pure functions over immutable board snapshots:
//! every legal move produces a new [`board::Board`] rather than mutating
//! shared state, and the caller owns the history of snapshots it needs
//! for ko checks, as well as the running capture tallies.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, komi, evaluation and search tuning
//! - [`board`] - Board snapshots, group and liberty analysis
//! - [`rules`] - Move legality, capture resolution, simple ko
//! - [`score`] - Area scoring with manual dead-stone marking
//! - [`eval`] - Static positional evaluation
//! - [`search`] - Depth-adaptive minimax with alpha-beta pruning
//! - [`advisor`] - One-ply move recommendations and situation summary
//!
//! ## Example
//!
//! ```
//! use nanago::board::{Board, Color};
//! use nanago::rules::try_move;
//! use nanago::search::best_move;
//!
//! // Black opens; the engine answers for White.
//! let board = Board::new(7);
//! let result = try_move(&board, 3, 3, Color::Black, None);
//! assert!(result.valid);
//!
//! let after = result.board.unwrap();
//! let reply = best_move(&after, Color::White, Some(&board));
//! assert!(reply.is_some());
//! ```
//!
//! ## Threading
//!
//! Nothing here holds state across calls, so no locking is needed.
//! [`search::best_move`] is the only expensive operation; run it off the
//! interaction path, apply its result before accepting further moves
//! against the same snapshot, and discard it if the game has moved on
//! (undo, restart, resignation) before it resolves.

pub mod advisor;
pub mod board;
pub mod constants;
pub mod eval;
pub mod rules;
pub mod score;
pub mod search;
