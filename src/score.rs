//! Area scoring with manual dead-stone marking.
//!
//! Scoring is a pure function of (board, dead-stone marks, capture
//! tallies): stones marked dead are treated as absent on a derived
//! scoring board, every live stone counts one point, and each maximal
//! empty region bordered by a single color counts as that color's
//! territory. Regions touching both colors, or an entirely empty board,
//! score to neither side. White receives komi.

use crate::board::{Board, Color, Point};
use crate::constants::KOMI;

/// Running per-color capture tally, owned by the caller and updated
/// from each move result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `stones` captures to `color`.
    pub fn credit(&mut self, color: Color, stones: u32) {
        match color {
            Color::Black => self.black += stones,
            Color::White => self.white += stones,
        }
    }

    /// Capture differential, Black-minus-White.
    pub fn diff(&self) -> i32 {
        self.black as i32 - self.white as i32
    }
}

/// Boolean grid marking stones as dead for scoring. Independent of the
/// board; marking never mutates the position.
#[derive(Debug, Clone)]
pub struct DeadStones {
    size: usize,
    marks: Vec<bool>,
}

impl DeadStones {
    /// An all-alive marking for a board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![false; size * size],
        }
    }

    /// Flip the dead mark at `(x, y)`.
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.size && y < self.size {
            self.marks[y * self.size + x] = !self.marks[y * self.size + x];
        }
    }

    /// True when the stone at `(x, y)` is marked dead.
    pub fn is_dead(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.marks[y * self.size + x]
    }
}

/// Final area score for both colors. Fractional only through komi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub black: f32,
    pub white: f32,
}

/// Compute the area score of a position.
///
/// Deterministic: identical inputs always yield the identical result.
pub fn calculate_score(board: &Board, dead: &DeadStones, captures: &Captures) -> Score {
    let size = board.size;
    // Dead stones are treated as empty without touching the board.
    let live = |x: usize, y: usize| -> Option<Color> {
        if dead.is_dead(x, y) {
            None
        } else {
            board.get(x, y)
        }
    };

    let mut black = captures.black as f32;
    let mut white = captures.white as f32 + KOMI;

    let mut visited = vec![false; size * size];

    for y in 0..size {
        for x in 0..size {
            match live(x, y) {
                Some(Color::Black) => black += 1.0,
                Some(Color::White) => white += 1.0,
                None => {
                    if visited[y * size + x] {
                        continue;
                    }
                    // Flood-fill the empty region and record which
                    // colors border it.
                    let mut region: Vec<Point> = Vec::new();
                    let mut stack = vec![(x, y)];
                    let mut borders_black = false;
                    let mut borders_white = false;

                    while let Some((cx, cy)) = stack.pop() {
                        let i = cy * size + cx;
                        if visited[i] {
                            continue;
                        }
                        visited[i] = true;
                        region.push((cx, cy));

                        for (nx, ny) in board.neighbors(cx, cy) {
                            match live(nx, ny) {
                                None => stack.push((nx, ny)),
                                Some(Color::Black) => borders_black = true,
                                Some(Color::White) => borders_white = true,
                            }
                        }
                    }

                    match (borders_black, borders_white) {
                        (true, false) => black += region.len() as f32,
                        (false, true) => white += region.len() as f32,
                        // Dame, or a board with no live stones at all.
                        _ => {}
                    }
                }
            }
        }
    }

    Score { black, white }
}
