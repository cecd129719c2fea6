use crate::core::{Board, Player};

use super::Heuristic;

/// Scores every position as even; minimax then only sees wins and losses
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _: &Board, _: Player, _: usize) -> i32 {
        0
    }
}
