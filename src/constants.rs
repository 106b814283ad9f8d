//! Constants for game setup, scoring, and search depth.
//!
//! Everything the engine treats as a fixed tuning value lives here, so
//! the rules, the heuristic and the depth selector all read from one place.

// =============================================================================
// Game Setup
// =============================================================================

/// Smallest value an item can hold.
pub const MIN_VALUE: u8 = 1;

/// Largest value an item can hold.
pub const MAX_VALUE: u8 = 4;

/// Starting score for both players.
pub const START_SCORE: i32 = 100;

/// Bound on the magnitude of any score during a game, playout included.
/// Starting scores are checked against it, so a score difference always
/// fits in an `i32` and never reaches `i32::MIN` or `i32::MAX`.
pub const SCORE_LIMIT: i32 = i32::MAX / 4;

/// Sequence length used when none is given.
pub const DEFAULT_LENGTH: usize = 15;

/// Shortest sequence a front end should offer. Not enforced by the engine.
pub const MIN_RECOMMENDED_LENGTH: usize = 15;

/// Longest sequence a front end should offer. Not enforced by the engine.
pub const MAX_RECOMMENDED_LENGTH: usize = 25;

// =============================================================================
// Heuristic Playout
// =============================================================================

/// Cost charged to the mover for each value during the greedy playout,
/// indexed by value (index 0 is unused).
///
/// Odd values give points to the opponent, which the playout books as the
/// same loss for the mover; even values cost the mover double.
pub const PLAYOUT_COST: [i32; 5] = [0, -1, -4, -3, -8];

// =============================================================================
// Depth Selection
// =============================================================================

/// Depth brackets as `(minimum remaining items, depth)`, checked in order.
/// Anything below the last bracket uses [`ENDGAME_DEPTH`].
pub const DEPTH_BRACKETS: [(usize, u32); 3] = [(23, 7), (17, 8), (13, 9)];

/// Depth used once 12 or fewer items remain.
pub const ENDGAME_DEPTH: u32 = 10;
