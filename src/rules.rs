//! Move legality, capture resolution, and simple-ko detection.
//!
//! [`try_move`] is the only producer of new board snapshots. It never
//! mutates its input: an illegal move returns `valid = false` with no
//! board attached, and the caller's snapshot is untouched either way.
//!
//! Ko is detected one step deep only: a move whose resulting board is
//! cell-for-cell identical to the supplied previous snapshot is rejected
//! with `is_ko = true`. Longer repetition cycles are deliberately not
//! caught (no positional superko).

use crate::board::{Board, Color};

/// Outcome of attempting a move.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Whether the move is legal.
    pub valid: bool,
    /// The resulting snapshot; `None` when the move was rejected.
    pub board: Option<Board>,
    /// Opponent stones captured by this move.
    pub captured: u32,
    /// True when the move was rejected specifically as a ko retake.
    pub is_ko: bool,
}

impl MoveResult {
    fn invalid() -> Self {
        MoveResult {
            valid: false,
            board: None,
            captured: 0,
            is_ko: false,
        }
    }

    fn ko() -> Self {
        MoveResult {
            is_ko: true,
            ..Self::invalid()
        }
    }
}

/// Attempt to place `color` at `(x, y)`.
///
/// Resolution order:
/// 1. Reject out-of-bounds or occupied targets outright.
/// 2. Place the stone on a copy of the board.
/// 3. Remove every adjacent opponent group left without liberties; each
///    neighboring group is checked and removed independently, in full.
/// 4. Reject suicide: the placed stone's own group has no liberties and
///    nothing was captured.
/// 5. Reject ko: the result is identical to `previous`.
///
/// On success the result carries the new snapshot and the number of
/// stones captured.
pub fn try_move(
    board: &Board,
    x: usize,
    y: usize,
    color: Color,
    previous: Option<&Board>,
) -> MoveResult {
    if !board.in_bounds(x, y) || board.get(x, y).is_some() {
        return MoveResult::invalid();
    }

    let mut next = board.clone();
    next.put(x, y, Some(color));

    let opponent = color.opponent();
    let mut captured = 0u32;
    let neighbors: Vec<_> = next.neighbors(x, y).collect();
    for (nx, ny) in neighbors {
        if next.get(nx, ny) != Some(opponent) {
            continue;
        }
        let group = next.group_info(nx, ny);
        if group.is_captured() {
            captured += group.stones.len() as u32;
            for &(gx, gy) in &group.stones {
                next.put(gx, gy, None);
            }
        }
    }

    if captured == 0 && next.group_info(x, y).is_captured() {
        return MoveResult::invalid(); // suicide
    }

    if let Some(prev) = previous {
        if next == *prev {
            return MoveResult::ko();
        }
    }

    MoveResult {
        valid: true,
        board: Some(next),
        captured,
        is_ko: false,
    }
}
