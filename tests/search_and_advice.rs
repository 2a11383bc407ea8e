//! Integration tests for the search engine and move recommender.

use nanago::advisor::situation_analysis;
use nanago::board::{Board, Color};
use nanago::constants::ADVICE_K;
use nanago::rules::try_move;
use nanago::score::Captures;
use nanago::search::best_move;

use Color::{Black, White};

// =============================================================================
// Helper functions
// =============================================================================

/// Play a sequence of (x, y, color) moves, panicking on an illegal one.
fn play_all(moves: &[(usize, usize, Color)]) -> (Board, Option<Board>, Captures) {
    let mut board = Board::new(7);
    let mut previous: Option<Board> = None;
    let mut captures = Captures::new();
    for &(x, y, color) in moves {
        let result = try_move(&board, x, y, color, previous.as_ref());
        assert!(result.valid, "setup move ({x},{y}) for {color:?} was illegal");
        captures.credit(color, result.captured);
        previous = Some(std::mem::replace(&mut board, result.board.unwrap()));
    }
    (board, previous, captures)
}

// =============================================================================
// Search engine
// =============================================================================

#[test]
fn test_opening_override_is_exact_center() {
    let board = Board::new(7);
    assert_eq!(best_move(&board, Black, None), Some((3, 3)));
}

#[test]
fn test_search_returns_legal_moves() {
    // Whatever the engine picks through a short game, it must be legal.
    let mut board = Board::new(7);
    let mut previous: Option<Board> = None;
    let mut turn = Black;

    for _ in 0..12 {
        let Some((x, y)) = best_move(&board, turn, previous.as_ref()) else {
            break;
        };
        let result = try_move(&board, x, y, turn, previous.as_ref());
        assert!(result.valid, "engine proposed illegal move ({x},{y})");
        previous = Some(std::mem::replace(&mut board, result.board.unwrap()));
        turn = turn.opponent();
    }
    assert!(!board.is_empty_board());
}

#[test]
fn test_search_determinism() {
    let (board, previous, _) = play_all(&[
        (3, 3, Black),
        (2, 2, White),
        (4, 2, Black),
        (2, 4, White),
        (4, 4, Black),
    ]);

    let first = best_move(&board, White, previous.as_ref());
    for _ in 0..3 {
        assert_eq!(best_move(&board, White, previous.as_ref()), first);
    }
}

#[test]
fn test_search_prefers_the_capture() {
    // A black chain in atari: white's strongest move is the capture at
    // (3, 5), worth more than any quiet alternative.
    let (board, previous, _) = play_all(&[
        (3, 3, Black),
        (2, 3, White),
        (3, 4, Black),
        (4, 3, White),
        (0, 0, Black),
        (2, 4, White),
        (0, 1, Black),
        (4, 4, White),
        (0, 2, Black),
        (3, 2, White),
    ]);

    // The chain (3,3)-(3,4) has (3,5) as its only liberty.
    assert_eq!(best_move(&board, White, previous.as_ref()), Some((3, 5)));
}

#[test]
fn test_search_respects_ko() {
    // Set up the ko, let white take it, then ask the engine for black's
    // move: anything but the forbidden recapture is acceptable.
    let (board, _, _) = play_all(&[
        (2, 1, Black),
        (3, 1, White),
        (1, 2, Black),
        (4, 2, White),
        (2, 3, Black),
        (3, 3, White),
        (3, 2, Black),
    ]);
    let take = try_move(&board, 2, 2, White, None);
    assert!(take.valid);
    let after_take = take.board.unwrap();

    let reply = best_move(&after_take, Black, Some(&board));
    assert_ne!(reply, Some((3, 2)), "engine must not retake the ko");
}

#[test]
fn test_pass_when_no_legal_move() {
    // Black owns the board with two eyes at opposite corners; white has
    // no legal move and the engine must signal a pass.
    let mut moves = Vec::new();
    for y in 0..7 {
        for x in 0..7 {
            if (x, y) != (0, 0) && (x, y) != (6, 6) {
                moves.push((x, y, Black));
            }
        }
    }
    let (board, _, _) = play_all(&moves);

    assert_eq!(best_move(&board, White, None), None);
}

// =============================================================================
// Move recommender
// =============================================================================

#[test]
fn test_analysis_shape_and_determinism() {
    let (board, _, captures) = play_all(&[(3, 3, Black), (2, 2, White), (4, 4, Black)]);

    let a = situation_analysis(&board, &captures, White, Some((4, 4)), 3).unwrap();
    let b = situation_analysis(&board, &captures, White, Some((4, 4)), 3).unwrap();

    assert_eq!(a.recommendations.len(), ADVICE_K);
    assert_eq!(a.warnings.len(), ADVICE_K);
    assert!(!a.summary.is_empty());
    for (x, y) in a.recommendations.iter().map(|r| r.point) {
        assert_eq!(board.get(x, y), None, "advice must target empty cells");
    }

    let pts = |v: &[nanago::advisor::Advice]| v.iter().map(|a| a.point).collect::<Vec<_>>();
    assert_eq!(pts(&a.recommendations), pts(&b.recommendations));
    assert_eq!(pts(&a.warnings), pts(&b.warnings));
}

#[test]
fn test_analysis_recommends_capture() {
    let (board, _, captures) = play_all(&[
        (1, 1, White),
        (0, 1, Black),
        (5, 5, White),
        (1, 0, Black),
        (5, 6, White),
        (2, 1, Black),
    ]);

    let analysis = situation_analysis(&board, &captures, Black, None, 6).unwrap();
    assert_eq!(analysis.recommendations[0].point, (1, 2));
    assert!(analysis.recommendations[0].reason.contains("captures"));
}

#[test]
fn test_analysis_none_when_no_moves() {
    let mut moves = Vec::new();
    for y in 0..7 {
        for x in 0..7 {
            if (x, y) != (0, 0) && (x, y) != (6, 6) {
                moves.push((x, y, Black));
            }
        }
    }
    let (board, _, captures) = play_all(&moves);

    assert!(situation_analysis(&board, &captures, White, None, 60).is_none());
}
