//! Game state representation.
//!
//! A [`GameState`] is a plain value: the remaining items, both scores and the
//! length the game started with. Moves never modify a state in place; the
//! rules produce a fresh state for every move, so a search can branch from one
//! ancestor as often as it likes.
//!
//! Whose turn it is is not stored. It follows from how many items have been
//! removed so far (see [`GameState::to_move`]).

use std::fmt;

use fastrand::Rng;

use crate::constants::{MAX_VALUE, MIN_VALUE, SCORE_LIMIT, START_SCORE};
use crate::error::{GameError, Result};

/// One of the two seats at the table.
///
/// `First` (player A) moves when an even number of items has been removed,
/// `Second` (player B) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other seat.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "A"),
            Player::Second => write!(f, "B"),
        }
    }
}

/// A snapshot of the game between two moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Remaining items, each in `MIN_VALUE..=MAX_VALUE`. Moves address them by index.
    items: Vec<u8>,
    /// Score of the first player (A)
    score_a: i32,
    /// Score of the second player (B)
    score_b: i32,
    /// Number of items at the start of the game
    original_length: usize,
}

impl GameState {
    /// Build a state from explicit parts.
    ///
    /// Fails with `InvalidConfiguration` if an item lies outside the value
    /// range, there are more items than `original_length`, or a score could
    /// leave `±SCORE_LIMIT` before the remaining items run out.
    pub fn from_parts(
        items: Vec<u8>,
        score_a: i32,
        score_b: i32,
        original_length: usize,
    ) -> Result<Self> {
        if let Some(&bad) = items.iter().find(|&&v| !(MIN_VALUE..=MAX_VALUE).contains(&v)) {
            return Err(GameError::config(format!(
                "item value {bad} is outside {MIN_VALUE}..={MAX_VALUE}"
            )));
        }
        if items.len() > original_length {
            return Err(GameError::config(format!(
                "{} items exceed the original length {original_length}",
                items.len()
            )));
        }
        check_start_score(score_a, items.len())?;
        check_start_score(score_b, items.len())?;
        Ok(Self {
            items,
            score_a,
            score_b,
            original_length,
        })
    }

    /// Start a game from a fixed sequence with the default scores.
    pub fn from_items(items: Vec<u8>) -> Result<Self> {
        let len = items.len();
        if len == 0 {
            return Err(GameError::config("sequence must not be empty"));
        }
        Self::from_parts(items, START_SCORE, START_SCORE, len)
    }

    /// Start a game from a fixed sequence with custom starting scores.
    pub fn with_scores(items: Vec<u8>, score_a: i32, score_b: i32) -> Result<Self> {
        let len = items.len();
        if len == 0 {
            return Err(GameError::config("sequence must not be empty"));
        }
        Self::from_parts(items, score_a, score_b, len)
    }

    #[inline]
    pub fn items(&self) -> &[u8] {
        &self.items
    }

    #[inline]
    pub fn score_a(&self) -> i32 {
        self.score_a
    }

    #[inline]
    pub fn score_b(&self) -> i32 {
        self.score_b
    }

    /// Score of the given seat.
    pub fn score(&self, player: Player) -> i32 {
        match player {
            Player::First => self.score_a,
            Player::Second => self.score_b,
        }
    }

    #[inline]
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    /// Number of items still in play.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of moves played so far.
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.original_length - self.items.len()
    }

    /// The seat about to move, derived from the parity of moves played.
    pub fn to_move(&self) -> Player {
        if self.moves_played() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Copy of this state with the item at `position` removed. Scores are untouched.
    pub(crate) fn without_item(&self, position: usize) -> GameState {
        let mut next = self.clone();
        next.items.remove(position);
        next
    }

    /// Add `delta` to the score of `player`.
    pub(crate) fn adjust_score(&mut self, player: Player, delta: i32) {
        match player {
            Player::First => self.score_a += delta,
            Player::Second => self.score_b += delta,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.items.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "[{}] A={} B={} to_move={}",
            items.join(" "),
            self.score_a,
            self.score_b,
            self.to_move()
        )
    }
}

/// Check that `score` stays within `±SCORE_LIMIT` over `moves` more moves.
///
/// A move changes a score by at most `2 * MAX_VALUE`, and so does each step
/// of the heuristic playout.
pub fn check_start_score(score: i32, moves: usize) -> Result<()> {
    let swing = (moves as i64).saturating_mul(2 * MAX_VALUE as i64);
    let reach = (score as i64).abs().saturating_add(swing);
    if reach > SCORE_LIMIT as i64 {
        return Err(GameError::config(format!(
            "score {score} can leave the range ±{SCORE_LIMIT} within {moves} moves"
        )));
    }
    Ok(())
}

/// Create a new game with `length` random items and the default scores.
///
/// Fails with `InvalidConfiguration` when `length` is zero.
pub fn new_game(length: usize, rng: &mut Rng) -> Result<GameState> {
    new_game_with_scores(length, START_SCORE, START_SCORE, rng)
}

/// Create a new game with `length` random items and custom starting scores.
pub fn new_game_with_scores(
    length: usize,
    score_a: i32,
    score_b: i32,
    rng: &mut Rng,
) -> Result<GameState> {
    if length == 0 {
        return Err(GameError::config("sequence length must be positive"));
    }
    let items = (0..length).map(|_| rng.u8(MIN_VALUE..=MAX_VALUE)).collect();
    GameState::from_parts(items, score_a, score_b, length)
}
