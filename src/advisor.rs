//! One-ply move recommendations and a situation summary.
//!
//! Advisory output for display: every empty cell is probed with a single
//! [`try_move`] and, when legal, scored by one static evaluation of the
//! result plus a liberty-danger adjustment. No recursion is involved, so
//! the whole analysis stays O(size^2) single-ply evaluations and remains
//! cheap enough for interactive use. The prose here is local and
//! deterministic; any natural-language commentary service sits outside
//! the engine.

use crate::board::{Board, Color, Point};
use crate::constants::{
    ADVICE_K, DANGER_ATARI, DANGER_TWO_LIBERTIES, MIDGAME_MOVES, OPENING_MOVES,
};
use crate::eval::{center_distance, evaluate};
use crate::rules::try_move;
use crate::score::{calculate_score, Captures, DeadStones};

/// A ranked candidate move with a short human-readable rationale.
#[derive(Debug, Clone)]
pub struct Advice {
    pub point: Point,
    pub score: i32,
    pub reason: String,
}

/// Advisory snapshot of the position: a prose summary, the strongest
/// candidate moves, and the moves to avoid.
#[derive(Debug, Clone)]
pub struct SituationAnalysis {
    pub summary: String,
    pub recommendations: Vec<Advice>,
    pub warnings: Vec<Advice>,
}

/// Analyze the position for the side to move.
///
/// Returns `None` when `turn` has no legal move at all. Otherwise every
/// legal candidate is scored one ply deep, and the top and bottom
/// `ADVICE_K` candidates become recommendations and warnings.
pub fn situation_analysis(
    board: &Board,
    captures: &Captures,
    turn: Color,
    last_move: Option<Point>,
    move_count: usize,
) -> Option<SituationAnalysis> {
    let mut ranked: Vec<Advice> = Vec::new();

    for (x, y) in board.empties() {
        let result = try_move(board, x, y, turn, None);
        let Some(next) = result.board else { continue };

        let diff = captures.diff()
            + match turn {
                Color::Black => result.captured as i32,
                Color::White => -(result.captured as i32),
            };
        let mut score = evaluate(&next, turn.opponent(), diff, turn);

        let own = next.group_info(x, y);
        let libs = own.liberties.len();
        match libs {
            1 => score -= DANGER_ATARI,
            2 => score -= DANGER_TWO_LIBERTIES,
            _ => {}
        }

        let reason = describe(board.size, (x, y), result.captured, libs);
        ranked.push(Advice {
            point: (x, y),
            score,
            reason,
        });
    }

    if ranked.is_empty() {
        return None;
    }

    // Stable sort keeps raster order among equals, so output is
    // deterministic.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let recommendations: Vec<Advice> = ranked.iter().take(ADVICE_K).cloned().collect();
    let tail = ranked.len().saturating_sub(ADVICE_K).max(recommendations.len());
    let mut warnings: Vec<Advice> = ranked[tail..].to_vec();
    warnings.reverse(); // worst first

    let summary = summarize(board, captures, turn, last_move, move_count);

    Some(SituationAnalysis {
        summary,
        recommendations,
        warnings,
    })
}

/// Short rationale for a candidate move.
fn describe(size: usize, point: Point, captured: u32, liberties: usize) -> String {
    if captured == 1 {
        return "captures a stone".to_string();
    }
    if captured > 1 {
        return format!("captures {captured} stones");
    }
    match liberties {
        1 => "leaves your group in atari".to_string(),
        2 => "leaves your group with only two liberties".to_string(),
        _ => {
            if center_distance(size, point.0, point.1) <= 1 {
                "builds central influence".to_string()
            } else {
                format!("solid: keeps {liberties} liberties")
            }
        }
    }
}

/// Prose summary of the material balance and game phase.
fn summarize(
    board: &Board,
    captures: &Captures,
    turn: Color,
    last_move: Option<Point>,
    move_count: usize,
) -> String {
    let score = calculate_score(board, &DeadStones::new(board.size), captures);
    let phase = if move_count < OPENING_MOVES {
        "opening"
    } else if move_count < MIDGAME_MOVES {
        "middle game"
    } else {
        "endgame"
    };
    let margin = (score.black - score.white).abs();
    let leader = if score.black > score.white {
        format!("Black leads by {margin:.1} points")
    } else {
        format!("White leads by {margin:.1} points")
    };
    let standing = match evaluate(board, turn, captures.diff(), turn) {
        v if v > 0 => "the position favors you",
        v if v < 0 => "the position is against you",
        _ => "the position is balanced",
    };
    let mover = match turn {
        Color::Black => "Black",
        Color::White => "White",
    };
    let last = match last_move {
        Some((x, y)) => format!("after the last move at ({x}, {y})"),
        None => "with no move played yet".to_string(),
    };

    format!(
        "Move {move_count} ({phase}), {mover} to play {last}. \
         {leader} on the current count, and {standing}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color::{Black, White};

    fn setup(stones: &[(usize, usize, Color)]) -> Board {
        let mut board = Board::new(7);
        for &(x, y, color) in stones {
            board.put(x, y, Some(color));
        }
        board
    }

    #[test]
    fn test_analysis_on_open_board() {
        let board = setup(&[(3, 3, Black)]);
        let analysis =
            situation_analysis(&board, &Captures::new(), White, Some((3, 3)), 1).unwrap();
        assert_eq!(analysis.recommendations.len(), ADVICE_K);
        assert_eq!(analysis.warnings.len(), ADVICE_K);
        assert!(analysis.summary.contains("opening"));
        // Best and worst do not overlap on a wide-open board.
        let rec: Vec<_> = analysis.recommendations.iter().map(|a| a.point).collect();
        for w in &analysis.warnings {
            assert!(!rec.contains(&w.point));
        }
    }

    #[test]
    fn test_capture_is_top_recommendation() {
        // White stone in atari; taking it is the clear one-ply best.
        let board = setup(&[(1, 1, White), (0, 1, Black), (1, 0, Black), (2, 1, Black)]);
        let analysis =
            situation_analysis(&board, &Captures::new(), Black, None, 6).unwrap();
        let top = &analysis.recommendations[0];
        assert_eq!(top.point, (1, 2));
        assert!(top.reason.contains("captures"));
    }

    #[test]
    fn test_self_atari_is_flagged() {
        // Playing at (0,0) leaves the white stone with a single liberty.
        let board = setup(&[(1, 0, Black), (1, 1, Black), (2, 0, Black)]);
        let analysis =
            situation_analysis(&board, &Captures::new(), White, None, 3).unwrap();
        let advice = analysis
            .recommendations
            .iter()
            .chain(analysis.warnings.iter())
            .find(|a| a.point == (0, 0));
        if let Some(advice) = advice {
            assert!(advice.reason.contains("atari"));
        }
    }

    #[test]
    fn test_no_legal_moves_yields_none() {
        let mut board = Board::new(7);
        for y in 0..7 {
            for x in 0..7 {
                if (x, y) != (0, 0) && (x, y) != (6, 6) {
                    board.put(x, y, Some(Black));
                }
            }
        }
        assert!(situation_analysis(&board, &Captures::new(), White, None, 60).is_none());
    }

    #[test]
    fn test_analysis_deterministic() {
        let board = setup(&[(3, 3, Black), (2, 2, White), (4, 4, White)]);
        let a = situation_analysis(&board, &Captures::new(), Black, Some((4, 4)), 3).unwrap();
        let b = situation_analysis(&board, &Captures::new(), Black, Some((4, 4)), 3).unwrap();
        let pts = |v: &[Advice]| v.iter().map(|a| a.point).collect::<Vec<_>>();
        assert_eq!(pts(&a.recommendations), pts(&b.recommendations));
        assert_eq!(pts(&a.warnings), pts(&b.warnings));
        assert_eq!(a.summary, b.summary);
    }
}
