//! Greedy playout used as the static evaluation at the search frontier.
//!
//! Rather than scoring a position with a fixed formula, the playout finishes
//! the game: on each turn the mover takes the remaining item with the lowest
//! entry in [`PLAYOUT_COST`] and books that cost against its own running
//! score. The result is `score_a - score_b` after the last item is gone, which
//! is the sign convention the search uses (player A minimizes).
//!
//! The playout works on the multiset of remaining values, so item order and
//! which duplicate is taken never matter.

use crate::constants::{MAX_VALUE, MIN_VALUE, PLAYOUT_COST};
use crate::state::{GameState, Player};

/// Values in the order the playout takes them: lowest cost first.
fn playout_order() -> [u8; (MAX_VALUE - MIN_VALUE + 1) as usize] {
    let mut order = [0u8; (MAX_VALUE - MIN_VALUE + 1) as usize];
    for (slot, v) in order.iter_mut().zip(MIN_VALUE..=MAX_VALUE) {
        *slot = v;
    }
    // Stable, so equal costs keep ascending value order
    order.sort_by_key(|&v| PLAYOUT_COST[v as usize]);
    order
}

/// Evaluate `state` by playing it out greedily to the end.
///
/// On a terminal state nothing is played and the plain score difference comes back.
pub fn heuristic(state: &GameState) -> i32 {
    let mut counts = [0usize; MAX_VALUE as usize + 1];
    for &v in state.items() {
        counts[v as usize] += 1;
    }

    let mut score_a = state.score_a();
    let mut score_b = state.score_b();
    let mut mover = state.to_move();

    for v in playout_order() {
        let cost = PLAYOUT_COST[v as usize];
        for _ in 0..counts[v as usize] {
            match mover {
                Player::First => score_a += cost,
                Player::Second => score_b += cost,
            }
            mover = mover.opponent();
        }
    }

    score_a - score_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_order() {
        assert_eq!(playout_order(), [4, 2, 3, 1]);
    }

    #[test]
    fn test_terminal_state_is_score_difference() {
        let state = GameState::from_parts(vec![], 101, 102, 3).unwrap();
        assert_eq!(heuristic(&state), -1);
    }

    #[test]
    fn test_single_item() {
        // A takes the 4 at cost -8
        let state = GameState::from_items(vec![4]).unwrap();
        assert_eq!(heuristic(&state), -8);
    }

    #[test]
    fn test_alternating_costs() {
        // Order taken: 4 (A, -8), 2 (B, -4), 3 (A, -3), 1 (B, -1)
        let state = GameState::from_items(vec![1, 3, 2, 4]).unwrap();
        assert_eq!(heuristic(&state), (100 - 8 - 3) - (100 - 4 - 1));
    }

    #[test]
    fn test_second_player_to_move() {
        // One item already taken, so B moves first in the playout
        let state = GameState::from_parts(vec![4, 4], 100, 100, 3).unwrap();
        assert_eq!(heuristic(&state), 0);

        let state = GameState::from_parts(vec![4], 90, 100, 2).unwrap();
        assert_eq!(heuristic(&state), 90 - 92);
    }

    #[test]
    fn test_order_independent() {
        let a = GameState::from_items(vec![1, 2, 3, 4, 4, 1]).unwrap();
        let b = GameState::from_items(vec![4, 1, 4, 3, 2, 1]).unwrap();
        assert_eq!(heuristic(&a), heuristic(&b));
    }
}
