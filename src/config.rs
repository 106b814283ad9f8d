//! Run-time settings for a match.
//!
//! Compile-time tuning lives in [`constants`](crate::constants); this holds
//! what a user picks per run: sequence length, starting score, search
//! algorithm and depth, RNG seed, and which seat the computer takes.

use fastrand::Rng;

use crate::constants::{
    DEFAULT_LENGTH, MAX_RECOMMENDED_LENGTH, MIN_RECOMMENDED_LENGTH, START_SCORE,
};
use crate::error::{GameError, Result};
use crate::search::Algorithm;
use crate::state::{GameState, Player, check_start_score, new_game_with_scores};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of items in a fresh sequence
    pub length: usize,
    /// Starting score for both players
    pub start_score: i32,
    pub algorithm: Algorithm,
    /// Fixed search depth; `None` lets the depth selector decide
    pub depth: Option<u32>,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Whether the computer takes the first seat
    pub computer_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            start_score: START_SCORE,
            algorithm: Algorithm::default(),
            depth: None,
            seed: None,
            computer_first: false,
        }
    }
}

impl GameConfig {
    /// Check the settings before a game is created.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(GameError::config("sequence length must be positive"));
        }
        if self.depth == Some(0) {
            return Err(GameError::config("search depth must be positive"));
        }
        check_start_score(self.start_score, self.length)
    }

    /// Whether the length lies in the range front ends offer. Other lengths
    /// are still playable.
    pub fn has_recommended_length(&self) -> bool {
        (MIN_RECOMMENDED_LENGTH..=MAX_RECOMMENDED_LENGTH).contains(&self.length)
    }

    /// Random source for this run.
    pub fn rng(&self) -> Rng {
        match self.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        }
    }

    /// Seat the computer plays.
    pub fn computer_seat(&self) -> Player {
        if self.computer_first {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Fresh game of the configured length and starting score.
    pub fn new_game(&self, rng: &mut Rng) -> Result<GameState> {
        self.validate()?;
        new_game_with_scores(self.length, self.start_score, self.start_score, rng)
    }
}
