//! Sliding-window pattern scorer

use crate::core::{board::outcome::DIRECTIONS, Board, Player};

use super::Heuristic;

const LINE_SCORE: i32 = 1000;
const ONE_SHORT_SCORE: i32 = 5;
const TWO_SHORT_SCORE: i32 = 2;
const OPPONENT_ONE_SHORT_PENALTY: i32 = 500;

/// Scores every window of `win_length` cells that starts on an occupied cell
/// and runs in one of the four forward directions
pub struct SlidingWindowHeuristic;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowCounts {
    pub own: usize,
    pub opponent: usize,
    pub empty: usize,
}

/// Tally the `win_length` cells starting at (column, row) in `dir`, or
/// `None` if the window runs off the board
pub(crate) fn count_window(
    board: &Board,
    player: Player,
    column: usize,
    row: usize,
    dir: (isize, isize),
    win_length: usize,
) -> Option<WindowCounts> {
    board.offset(column, row, dir, win_length as isize - 1)?;

    let mut counts = WindowCounts::default();
    for k in 0..win_length as isize {
        let (c, r) = board.offset(column, row, dir, k)?;
        match board.get(c, r) {
            Some(p) if p == player => counts.own += 1,
            Some(_) => counts.opponent += 1,
            None => counts.empty += 1,
        }
    }
    Some(counts)
}

fn score_window(counts: WindowCounts, win_length: usize) -> i32 {
    let mut score = 0;

    if counts.own == win_length {
        score += LINE_SCORE;
    } else if counts.own + 1 == win_length && counts.empty == 1 {
        score += ONE_SHORT_SCORE;
    } else if counts.own + 2 == win_length && counts.empty == 2 {
        score += TWO_SHORT_SCORE;
    }

    if counts.opponent + 1 == win_length && counts.empty == 1 {
        score -= OPPONENT_ONE_SHORT_PENALTY;
    }

    score
}

impl Heuristic for SlidingWindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32 {
        let mut score = 0;

        for column in 0..board.columns() {
            for row in 0..board.occupied_in_column(column) {
                for &dir in DIRECTIONS.iter() {
                    if let Some(counts) = count_window(board, player, column, row, dir, win_length) {
                        score += score_window(counts, win_length);
                    }
                }
            }
        }

        score
    }
}
