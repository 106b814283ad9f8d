//! Depth-limited game-tree search.
//!
//! Two interchangeable strategies choose the computer's move:
//!
//! - [`Algorithm::Minimax`] - exhaustive minimax down to the depth cutoff
//! - [`Algorithm::AlphaBeta`] - the same search with alpha-beta pruning
//!
//! Player A minimizes the evaluation, player B maximizes it. Nodes at the
//! cutoff (or with no items left) are scored by the greedy
//! [`heuristic`](crate::playout::heuristic) playout.
//!
//! Candidate moves are tried in ascending value order and only a strictly
//! better value replaces the current best, so the first of several equally
//! good moves is chosen, which makes the choice deterministic. Alpha-beta
//! only skips moves that cannot beat the current best, so with this
//! tie-break it returns the same move as plain minimax for the same state
//! and depth.
//!
//! ## Example
//!
//! ```
//! use seqduel::search::{best_move, Algorithm};
//! use seqduel::state::GameState;
//!
//! let state = GameState::from_items(vec![1, 4, 2, 3, 3]).unwrap();
//! let mv = best_move(&state, Algorithm::AlphaBeta, Some(3));
//! assert!(mv.is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::depth::select_depth;
use crate::error::GameError;
use crate::playout::heuristic;
use crate::rules::{expansion_moves, is_terminal, play_position};
use crate::state::{GameState, Player};

/// Search strategy used by the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "min-max" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            other => Err(GameError::config(format!("unknown algorithm '{other}'"))),
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Heuristic playouts run at the frontier
    pub evaluations: u64,
    /// Sibling lists abandoned by alpha-beta
    pub cutoffs: u64,
}

/// Outcome of a search from one root state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move value, `None` if the root was terminal
    pub best_move: Option<u8>,
    /// Evaluation of the chosen move
    pub value: Option<i32>,
    /// Depth cutoff that was used
    pub depth: u32,
    pub stats: SearchStats,
}

struct Searcher {
    algorithm: Algorithm,
    max_depth: u32,
    stats: SearchStats,
}

impl Searcher {
    fn new(algorithm: Algorithm, max_depth: u32) -> Self {
        Self {
            algorithm,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// Evaluate every root move once and keep the first strictly best one.
    fn root(&mut self, state: &GameState) -> (Option<u8>, Option<i32>) {
        self.stats.nodes += 1;
        let minimizing = state.to_move() == Player::First;

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best_value = if minimizing { i32::MAX } else { i32::MIN };
        let mut best_move = None;

        for (value, position) in expansion_moves(state) {
            let child = play_position(state, position);
            let eval = match self.algorithm {
                Algorithm::Minimax => self.minimax(&child, 1),
                Algorithm::AlphaBeta => self.alpha_beta(&child, 1, alpha, beta),
            };
            trace!("root candidate {value}: {eval}");

            if best_move.is_none() || improves(minimizing, eval, best_value) {
                best_value = eval;
                best_move = Some(value);
            }

            if self.algorithm == Algorithm::AlphaBeta {
                if minimizing {
                    beta = beta.min(eval);
                } else {
                    alpha = alpha.max(eval);
                }
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_move, best_move.map(|_| best_value))
    }

    fn frontier(&mut self, state: &GameState, depth: u32) -> Option<i32> {
        if is_terminal(state) || depth >= self.max_depth {
            self.stats.evaluations += 1;
            Some(heuristic(state))
        } else {
            None
        }
    }

    fn minimax(&mut self, state: &GameState, depth: u32) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.frontier(state, depth) {
            return value;
        }

        let minimizing = state.to_move() == Player::First;
        let mut best = if minimizing { i32::MAX } else { i32::MIN };

        for (_, position) in expansion_moves(state) {
            let child = play_position(state, position);
            let eval = self.minimax(&child, depth + 1);
            if minimizing {
                if eval < best {
                    best = eval;
                }
            } else if eval > best {
                best = eval;
            }
        }
        best
    }

    fn alpha_beta(&mut self, state: &GameState, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.frontier(state, depth) {
            return value;
        }

        let minimizing = state.to_move() == Player::First;
        let mut best = if minimizing { i32::MAX } else { i32::MIN };

        for (_, position) in expansion_moves(state) {
            let child = play_position(state, position);
            let eval = self.alpha_beta(&child, depth + 1, alpha, beta);
            if minimizing {
                if eval < best {
                    best = eval;
                }
                beta = beta.min(eval);
            } else {
                if eval > best {
                    best = eval;
                }
                alpha = alpha.max(eval);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Strict comparison for the side to move; ties keep the earlier candidate.
fn improves(minimizing: bool, eval: i32, best: i32) -> bool {
    if minimizing { eval < best } else { eval > best }
}

/// Run a search and return the move together with its statistics.
///
/// `depth` defaults to [`select_depth`]. A depth of 0 is treated as 1 so
/// that every root move is at least looked at.
pub fn search(state: &GameState, algorithm: Algorithm, depth: Option<u32>) -> SearchResult {
    let max_depth = depth.unwrap_or_else(|| select_depth(state)).max(1);
    let mut searcher = Searcher::new(algorithm, max_depth);
    let (best_move, value) = searcher.root(state);

    debug!(
        "{algorithm} depth={max_depth} nodes={} evaluations={} cutoffs={} best={best_move:?} value={value:?}",
        searcher.stats.nodes, searcher.stats.evaluations, searcher.stats.cutoffs
    );

    SearchResult {
        best_move,
        value,
        depth: max_depth,
        stats: searcher.stats,
    }
}

/// Best move value for the side to move, or `None` if the game is over.
pub fn best_move(state: &GameState, algorithm: Algorithm, depth: Option<u32>) -> Option<u8> {
    search(state, algorithm, depth).best_move
}

/// Plain minimax, no pruning.
pub fn minimax_best_move(state: &GameState, depth: Option<u32>) -> Option<u8> {
    best_move(state, Algorithm::Minimax, depth)
}

/// Minimax with alpha-beta pruning.
pub fn alpha_beta_best_move(state: &GameState, depth: Option<u32>) -> Option<u8> {
    best_move(state, Algorithm::AlphaBeta, depth)
}

/// Pick the computer's move with the requested strategy.
pub fn choose_computer_move(
    state: &GameState,
    algorithm: Algorithm,
    depth: Option<u32>,
) -> Option<u8> {
    best_move(state, algorithm, depth)
}
