use crate::core::{board::outcome::DIRECTIONS, Board, Player};

use super::{sliding::count_window, Heuristic};

const DEFENSE_WEIGHT: i32 = 2;

/// Offense minus weighted defense over every window on the board: windows
/// still open to one side only score the square of that side's pieces
pub struct OffenseDefenseHeuristic;

impl Heuristic for OffenseDefenseHeuristic {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32 {
        let mut offense = 0;
        let mut defense = 0;

        for column in 0..board.columns() {
            for row in 0..board.rows() {
                for &dir in DIRECTIONS.iter() {
                    let Some(counts) = count_window(board, player, column, row, dir, win_length) else {
                        continue;
                    };

                    let own = counts.own as i32;
                    let theirs = counts.opponent as i32;
                    if theirs == 0 {
                        offense += own * own;
                    } else if own == 0 {
                        defense += theirs * theirs;
                    }
                }
            }
        }

        offense - DEFENSE_WEIGHT * defense
    }
}
