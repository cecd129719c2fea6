use crate::core::{Board, Player};

/// Static evaluation of a position for minimax leaves.
///
/// Implementations are pure: same inputs, same score, and the board is never
/// changed. Higher is better for `player`.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32;
}
