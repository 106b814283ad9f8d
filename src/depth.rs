//! Search depth selection.
//!
//! Early in the game more distinct values tend to be present, so the tree is
//! wider and the depth is kept lower. As the sequence shrinks the depth grows.

use crate::constants::{DEPTH_BRACKETS, ENDGAME_DEPTH};
use crate::state::GameState;

/// Depth cutoff for a game with `remaining` items left.
pub fn depth_for_remaining(remaining: usize) -> u32 {
    DEPTH_BRACKETS
        .iter()
        .find(|&&(min_items, _)| remaining >= min_items)
        .map(|&(_, depth)| depth)
        .unwrap_or(ENDGAME_DEPTH)
}

/// Depth cutoff for `state`.
pub fn select_depth(state: &GameState) -> u32 {
    depth_for_remaining(state.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        let cases = [
            (40, 7),
            (23, 7),
            (22, 8),
            (17, 8),
            (16, 9),
            (13, 9),
            (12, 10),
            (1, 10),
            (0, 10),
        ];
        for (n, depth) in cases {
            assert_eq!(depth_for_remaining(n), depth, "n = {n}");
        }
    }

    #[test]
    fn test_select_depth_uses_remaining_items() {
        let state = GameState::from_parts(vec![1; 16], 100, 100, 25).unwrap();
        assert_eq!(select_depth(&state), 9);
    }
}
