use crate::core::{Board, Player};

use super::{trial::winning_columns, Heuristic};

const OWN_THREAT: i32 = 100;
const OPPONENT_THREAT: i32 = 120;

/// Counts immediate winning drops for both sides. Opponent threats weigh
/// more since the opponent may be the one to move.
pub struct ThreatHeuristic;

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32 {
        let mut scratch = board.clone();

        let own = winning_columns(&mut scratch, player, win_length).len() as i32;
        let theirs = winning_columns(&mut scratch, !player, win_length).len() as i32;

        debug_assert_eq!(&scratch, board);
        own * OWN_THREAT - theirs * OPPONENT_THREAT
    }
}
