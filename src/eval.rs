//! Static position evaluation.
//!
//! Three summed terms, tuned for small boards:
//! - **material**: the capture differential, scaled to dominate;
//! - **positional**: each stone scores its cell's ring weight, which
//!   peaks at the geometric center;
//! - **safety**: groups in atari are penalized hard (harder still when
//!   it is the opponent's turn), two-liberty groups moderately, and
//!   settled groups earn a small per-liberty bonus.
//!
//! The sum is computed Black-positive and negated once for the White
//! perspective, so the result always answers "how good is this position
//! for `perspective`".

use crate::board::{Board, Color};
use crate::constants::{
    ATARI_PENALTY, ATARI_TO_MOVE_FACTOR, CAPTURE_WEIGHT, LIBERTY_BONUS, POSITION_WEIGHT,
    RING_WEIGHTS, WEAK_GROUP_PENALTY,
};

/// Evaluate a position for `perspective`.
///
/// `capture_diff` is the Black-minus-White capture differential known to
/// the caller; `to_move` is the side whose turn it is, which sharpens
/// the atari penalty for the other side's weak groups.
pub fn evaluate(board: &Board, to_move: Color, capture_diff: i32, perspective: Color) -> i32 {
    let mut score = capture_diff * CAPTURE_WEIGHT;

    for ((x, y), color) in board.stones() {
        let w = ring_weight(board.size, x, y) * POSITION_WEIGHT;
        score += signed(color, w);
    }

    score += safety_term(board, to_move);

    match perspective {
        Color::Black => score,
        Color::White => -score,
    }
}

/// Positional weight of a cell by its Chebyshev ring distance from the
/// board center.
pub(crate) fn ring_weight(size: usize, x: usize, y: usize) -> i32 {
    let d = center_distance(size, x, y);
    RING_WEIGHTS[d.min(RING_WEIGHTS.len() - 1)]
}

/// Chebyshev distance from `(x, y)` to the central cell (or central
/// block, on even sizes).
pub(crate) fn center_distance(size: usize, x: usize, y: usize) -> usize {
    let lo = (size - 1) / 2;
    let hi = size / 2;
    let axis = |v: usize| {
        if v < lo {
            lo - v
        } else if v > hi {
            v - hi
        } else {
            0
        }
    };
    axis(x).max(axis(y))
}

fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::Black => value,
        Color::White => -value,
    }
}

/// Sum the liberty-based safety term over every group, Black-positive.
fn safety_term(board: &Board, to_move: Color) -> i32 {
    let size = board.size;
    let mut counted = vec![false; size * size];
    let mut score = 0;

    for ((x, y), color) in board.stones() {
        if counted[y * size + x] {
            continue;
        }
        let group = board.group_info(x, y);
        for &(gx, gy) in &group.stones {
            counted[gy * size + gx] = true;
        }

        let term = match group.liberties.len() {
            1 => {
                // One liberty: near-certain loss, certain if the other
                // side moves next.
                let mut penalty = ATARI_PENALTY;
                if to_move != color {
                    penalty *= ATARI_TO_MOVE_FACTOR;
                }
                -penalty
            }
            2 => -WEAK_GROUP_PENALTY,
            libs => libs as i32 * LIBERTY_BONUS,
        };
        score += signed(color, term);
    }
    score
}
