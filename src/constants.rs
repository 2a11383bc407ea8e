//! Constants for board geometry, scoring, evaluation, and search.
//!
//! All tuning knobs of the engine live here. The board size itself is a
//! runtime value (`Board::new(size)`); `DEFAULT_SIZE` is the 7x7 grid the
//! engine is tuned for, and the evaluation/search constants below assume a
//! board of roughly that scale.

// =============================================================================
// Board Geometry & Rules
// =============================================================================

/// Default board size (NxN). The engine is tuned for small-board play.
pub const DEFAULT_SIZE: usize = 7;

/// Komi: compensation points added to White's score for moving second.
pub const KOMI: f32 = 3.5;

// =============================================================================
// Position Evaluator Weights
// =============================================================================

/// Material weight: points per captured stone in the capture differential.
/// Dominates the evaluation; captures are the most concrete gain.
pub const CAPTURE_WEIGHT: i32 = 100;

/// Scale applied to the per-stone positional ring weight.
pub const POSITION_WEIGHT: i32 = 3;

/// Positional weight surface, indexed by ring distance from the board
/// center (Chebyshev). Peaks sharply at the center and falls off toward
/// the edges; distances beyond the table use the last entry.
pub const RING_WEIGHTS: [i32; 4] = [10, 5, 2, 1];

/// Penalty for a group left with exactly one liberty (atari).
pub const ATARI_PENALTY: i32 = 60;

/// Multiplier on `ATARI_PENALTY` when the endangered group's owner is not
/// the side to move: the capture is all but certain.
pub const ATARI_TO_MOVE_FACTOR: i32 = 2;

/// Penalty for a group with exactly two liberties.
pub const WEAK_GROUP_PENALTY: i32 = 20;

/// Bonus per liberty for a group with three or more liberties.
pub const LIBERTY_BONUS: i32 = 2;

// =============================================================================
// Search Parameters
// =============================================================================

/// Saturating "infinity" for alpha-beta windows. Kept well below
/// `i32::MAX` so bonuses layered onto propagated values cannot overflow.
pub const SCORE_INF: i32 = 1 << 30;

/// Score assigned when the side to move has no legal move at all,
/// heavily disfavoring that side so the search avoids forced passes.
pub const NO_MOVE_SCORE: i32 = 1_000_000;

/// Per-stone bonus layered onto a branch value whenever the branch move
/// captures, so tactically decisive captures bias the choice even at
/// shallow remaining depth.
pub const CAPTURE_SHAPING_BONUS: i32 = 40;

/// Per-stone bonus added to a root move's value for stones it captures
/// immediately.
pub const IMMEDIATE_CAPTURE_BONUS: i32 = 50;

/// Small top-level bonus for moves within one ring of the center,
/// applied only when searching for White (the side playing for central
/// pressure against the first mover).
pub const CENTER_TOUCH_BONUS: i32 = 8;

/// Empty-cell count above which the search stays shallow.
pub const EMPTY_OPENING: usize = 30;

/// Empty-cell count above which the search uses the mid-game depth.
pub const EMPTY_MIDGAME: usize = 15;

/// Empty-cell count at or below which the search goes near-exhaustive.
pub const EMPTY_ENDGAME: usize = 8;

/// Search depth while the board is mostly empty.
pub const DEPTH_OPENING: u32 = 2;

/// Search depth through the mid-game.
pub const DEPTH_MIDGAME: u32 = 3;

/// Search depth in the late game, before the endgame goes exhaustive.
pub const DEPTH_LATE: u32 = 4;

// =============================================================================
// Move Recommender Parameters
// =============================================================================

/// Number of recommendations and warnings the advisor returns.
pub const ADVICE_K: usize = 3;

/// Advisory penalty for a move that leaves the mover's group in atari.
pub const DANGER_ATARI: i32 = 80;

/// Advisory penalty for a move that leaves the mover's group with only
/// two liberties.
pub const DANGER_TWO_LIBERTIES: i32 = 25;

/// Move count below which the situation summary calls the game an opening.
pub const OPENING_MOVES: usize = 10;

/// Move count below which the situation summary calls it the middle game.
pub const MIDGAME_MOVES: usize = 30;
