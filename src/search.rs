//! Depth-adaptive minimax search with alpha-beta pruning.
//!
//! One [`best_move`] call per engine turn. Candidate moves are generated
//! center-first (successively farther rings, then raster order within a
//! ring); the ordering is load-bearing for both pruning efficiency and
//! the deterministic first-found tie-break. Search depth grows as the
//! board fills up, going near-exhaustive in the endgame, and a branch
//! that captures stones gets a shaping bonus layered onto its propagated
//! value so decisive captures win out even at shallow remaining depth.
//!
//! The search is synchronous and CPU-bound; callers are expected to run
//! it off their interaction path and to discard the result if the game
//! state has advanced (undo, restart, resignation) in the meantime.

use crate::board::{Board, Color, Point};
use crate::constants::{
    CAPTURE_SHAPING_BONUS, CENTER_TOUCH_BONUS, DEPTH_LATE, DEPTH_MIDGAME, DEPTH_OPENING,
    EMPTY_ENDGAME, EMPTY_MIDGAME, EMPTY_OPENING, IMMEDIATE_CAPTURE_BONUS, NO_MOVE_SCORE,
    SCORE_INF,
};
use crate::eval::{center_distance, evaluate};
use crate::rules::try_move;

/// Pick the strongest move for `color`, or `None` to pass.
///
/// `previous` is the snapshot preceding the opponent's last move, used
/// for the single-step ko check on root candidates; deeper in the tree
/// each child's previous board is its parent position.
///
/// On a completely empty board the search is skipped and the move is the
/// exact geometric center, a deliberate opening override. Ties at the
/// top level keep the first-found move under center-out generation.
pub fn best_move(board: &Board, color: Color, previous: Option<&Board>) -> Option<Point> {
    if board.is_empty_board() {
        let c = (board.size - 1) / 2;
        return Some((c, c));
    }

    let depth = adaptive_depth(board.count_empty());
    let mut best: Option<(Point, i32)> = None;

    for (x, y) in ordered_empties(board) {
        let result = try_move(board, x, y, color, previous);
        let Some(next) = result.board else { continue };

        let diff = capture_diff(color, result.captured);
        let mut value = minimax(
            &next,
            board,
            color.opponent(),
            color,
            depth.saturating_sub(1),
            -SCORE_INF,
            SCORE_INF,
            diff,
        );
        value += result.captured as i32 * IMMEDIATE_CAPTURE_BONUS;
        if color == Color::White && center_distance(board.size, x, y) <= 1 {
            value += CENTER_TOUCH_BONUS;
        }

        if best.is_none_or(|(_, v)| value > v) {
            best = Some(((x, y), value));
        }
    }

    best.map(|(p, _)| p)
}

/// Search depth for a given number of empty intersections: shallow while
/// the board is open, deeper through the mid-game, and near-exhaustive
/// once few cells remain.
fn adaptive_depth(empties: usize) -> u32 {
    if empties > EMPTY_OPENING {
        DEPTH_OPENING
    } else if empties > EMPTY_MIDGAME {
        DEPTH_MIDGAME
    } else if empties > EMPTY_ENDGAME {
        DEPTH_LATE
    } else {
        (empties as u32).max(1)
    }
}

/// Empty cells ordered center ring first, then successively farther
/// rings; raster order within a ring keeps the sequence stable.
fn ordered_empties(board: &Board) -> Vec<Point> {
    let mut cells: Vec<Point> = board.empties().collect();
    cells.sort_by_key(|&(x, y)| (center_distance(board.size, x, y), y, x));
    cells
}

/// Capture count as a Black-minus-White differential contribution.
fn capture_diff(mover: Color, captured: u32) -> i32 {
    match mover {
        Color::Black => captured as i32,
        Color::White => -(captured as i32),
    }
}

/// Minimax with alpha-beta pruning, scored from `ai`'s perspective.
///
/// `previous` is the parent position, which serves as the ko reference
/// for moves tried at this node. `diff` accumulates the Black-minus-
/// White captures made along the current line.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &Board,
    previous: &Board,
    to_move: Color,
    ai: Color,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    diff: i32,
) -> i32 {
    if depth == 0 {
        return evaluate(board, to_move, diff, ai);
    }

    let maximizing = to_move == ai;
    let mut moved = false;
    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

    for (x, y) in ordered_empties(board) {
        let result = try_move(board, x, y, to_move, Some(previous));
        let Some(next) = result.board else { continue };
        moved = true;

        let line_diff = diff + capture_diff(to_move, result.captured);
        let mut value = minimax(
            &next,
            board,
            to_move.opponent(),
            ai,
            depth - 1,
            alpha,
            beta,
            line_diff,
        );

        // Capture shaping: a capturing branch is sweetened (or soured)
        // beyond what the leaf evaluation already sees.
        let shaping = result.captured as i32 * CAPTURE_SHAPING_BONUS;
        value += if maximizing { shaping } else { -shaping };

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    if !moved {
        // The side to move cannot play at all: score it as a severe
        // extremum so the search only passes when genuinely forced.
        return if maximizing { -NO_MOVE_SCORE } else { NO_MOVE_SCORE };
    }
    best
}
