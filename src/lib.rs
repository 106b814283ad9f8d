//! Seqduel: a two-player number-removal game with a search-based opponent.
//!
//! Players alternately remove one item from a sequence of values 1..=4.
//! Even values cost the mover twice their value, odd values are credited to
//! the opponent, and the lower score wins once the sequence is empty. The
//! computer picks its moves with minimax or alpha-beta search.
//!
//! ## Modules
//!
//! - [`constants`] - Scores, value range, playout costs, depth brackets
//! - [`state`] - Immutable game state and game creation
//! - [`rules`] - Legal moves, move application, scoring, winner
//! - [`playout`] - Greedy playout heuristic for frontier nodes
//! - [`depth`] - Search depth selection
//! - [`search`] - Minimax and alpha-beta search
//! - [`config`] - Run-time match settings
//! - [`session`] - Text protocol for driving a match
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! use fastrand::Rng;
//! use seqduel::rules::{apply_move_at_position, apply_move_by_value};
//! use seqduel::search::{choose_computer_move, Algorithm};
//! use seqduel::state::new_game;
//!
//! let mut rng = Rng::with_seed(1);
//! let state = new_game(15, &mut rng).unwrap();
//!
//! // Human takes the first item
//! let state = apply_move_at_position(&state, 0).unwrap();
//!
//! // Computer answers
//! let value = choose_computer_move(&state, Algorithm::AlphaBeta, Some(4)).unwrap();
//! let (state, position) = apply_move_by_value(&state, value, &mut rng).unwrap();
//! println!("computer took {value} at {position}: {state}");
//! ```

pub mod config;
pub mod constants;
pub mod depth;
pub mod error;
pub mod playout;
pub mod rules;
pub mod search;
pub mod session;
pub mod state;

pub use error::{GameError, Result};
