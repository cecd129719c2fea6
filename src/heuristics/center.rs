use crate::core::{Board, Player};

use super::Heuristic;

const CENTER_MULTIPLIER: i32 = 3;

/// Rewards pieces close to the middle column, where most lines pass
pub struct CenterHeuristic;

impl CenterHeuristic {
    fn column_weight(columns: usize, column: usize) -> i32 {
        let center = columns / 2;
        let weight = (center + 1) as i32 - column.abs_diff(center) as i32;
        if column == center {
            weight * CENTER_MULTIPLIER
        } else {
            weight
        }
    }
}

impl Heuristic for CenterHeuristic {
    fn evaluate(&self, board: &Board, player: Player, _: usize) -> i32 {
        let mut score = 0;

        for column in 0..board.columns() {
            let weight = Self::column_weight(board.columns(), column);
            for row in 0..board.occupied_in_column(column) {
                match board.get(column, row) {
                    Some(p) if p == player => score += weight,
                    Some(_) => score -= weight,
                    None => {}
                }
            }
        }

        score
    }
}
