//! Game rules: legal moves, move execution and scoring.
//!
//! A move removes one item from the sequence. Human moves name a position;
//! computer moves name a value, and one of the positions holding that value is
//! picked at random. Both paths go through the same scoring law:
//!
//! - even value `v`: the mover loses `2v` points
//! - odd value `v`: the opponent gains `v` points
//!
//! The lower score wins at the end.

use fastrand::Rng;

use crate::constants::{MAX_VALUE, MIN_VALUE};
use crate::error::{GameError, Result};
use crate::state::{GameState, Player};

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Distinct values still present, in ascending order.
pub fn legal_move_values(state: &GameState) -> Vec<u8> {
    let mut present = [false; MAX_VALUE as usize + 1];
    for &v in state.items() {
        present[v as usize] = true;
    }
    (MIN_VALUE..=MAX_VALUE)
        .filter(|&v| present[v as usize])
        .collect()
}

/// Seat whose turn it is.
#[inline]
pub fn current_player(state: &GameState) -> Player {
    state.to_move()
}

/// The game is over once every item has been taken.
#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_empty()
}

/// Apply the scoring law for `mover` taking `value`.
pub fn update_scores(state: &mut GameState, mover: Player, value: u8) {
    let v = value as i32;
    if value % 2 == 0 {
        state.adjust_score(mover, -2 * v);
    } else {
        state.adjust_score(mover.opponent(), v);
    }
}

/// Remove the item at `position` and score it for the side to move.
pub fn apply_move_at_position(state: &GameState, position: usize) -> Result<GameState> {
    let len = state.len();
    if position >= len {
        return Err(GameError::PositionOutOfRange { position, len });
    }
    Ok(play_position(state, position))
}

/// Remove one item holding `value`, chosen uniformly among the matching
/// positions, and score it for the side to move.
///
/// Returns the new state together with the position that was removed.
pub fn apply_move_by_value(
    state: &GameState,
    value: u8,
    rng: &mut Rng,
) -> Result<(GameState, usize)> {
    let positions = positions_of(state, value);
    if positions.is_empty() {
        return Err(GameError::ValueNotPresent { value });
    }
    let position = positions[rng.usize(..positions.len())];
    Ok((play_position(state, position), position))
}

/// Legal values paired with the first position holding each, ascending by value.
///
/// Search expands children through these positions instead of drawing one at
/// random: which matching item goes makes no difference to scores or to the
/// remaining multiset.
pub(crate) fn expansion_moves(state: &GameState) -> Vec<(u8, usize)> {
    let mut first = [None; MAX_VALUE as usize + 1];
    for (i, &v) in state.items().iter().enumerate() {
        first[v as usize].get_or_insert(i);
    }
    (MIN_VALUE..=MAX_VALUE)
        .filter_map(|v| first[v as usize].map(|i| (v, i)))
        .collect()
}

/// Who won. Only meaningful once [`is_terminal`] holds.
pub fn winner(state: &GameState) -> Outcome {
    use std::cmp::Ordering;

    match state.score_a().cmp(&state.score_b()) {
        Ordering::Less => Outcome::Win(Player::First),
        Ordering::Greater => Outcome::Win(Player::Second),
        Ordering::Equal => Outcome::Draw,
    }
}

fn positions_of(state: &GameState, value: u8) -> Vec<usize> {
    state
        .items()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == value)
        .map(|(i, _)| i)
        .collect()
}

pub(crate) fn play_position(state: &GameState, position: usize) -> GameState {
    let mover = state.to_move();
    let value = state.items()[position];
    let mut next = state.without_item(position);
    update_scores(&mut next, mover, value);
    next
}
