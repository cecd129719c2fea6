//! Win and draw detection

use super::{Board, Outcome};
use crate::core::side::Player;

/// Forward directions as (column step, row step): up, right, up-right, down-right.
///
/// Every line is counted from its lowest-leftmost cell only, so probing
/// these four from every occupied cell visits each line exactly once.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Step from (column, row) by `k` in direction `dir`, if still on the board
    #[inline]
    pub(crate) fn offset(
        &self,
        column: usize,
        row: usize,
        dir: (isize, isize),
        k: isize,
    ) -> Option<(usize, usize)> {
        let c = column as isize + dir.0 * k;
        let r = row as isize + dir.1 * k;
        if c < 0 || r < 0 || c >= self.columns as isize || r >= self.rows as isize {
            return None;
        }
        Some((c as usize, r as usize))
    }

    /// Consecutive pieces of the same player starting at (column, row) in `dir`
    fn run_length(&self, column: usize, row: usize, dir: (isize, isize)) -> usize {
        let Some(player) = self.get(column, row) else {
            return 0;
        };

        let mut length = 1;
        while let Some((c, r)) = self.offset(column, row, dir, length as isize) {
            if self.get(c, r) != Some(player) {
                break;
            }
            length += 1;
        }
        length
    }

    /// First winner found scanning columns low to high, rows bottom to top
    pub fn winner(&self, win_length: usize) -> Option<Player> {
        for column in 0..self.columns {
            for row in 0..self.occupied_in_column(column) {
                let Some(player) = self.get(column, row) else {
                    continue;
                };

                if DIRECTIONS
                    .iter()
                    .any(|&dir| self.run_length(column, row, dir) >= win_length)
                {
                    return Some(player);
                }
            }
        }
        None
    }

    pub fn evaluate_outcome(&self, win_length: usize) -> Outcome {
        if let Some(player) = self.winner(win_length) {
            return Outcome::Win(player);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::Ongoing
    }

    /// Whether the piece at (column, row) is part of a run of `win_length`.
    ///
    /// Checks both ways along every direction, so it finds lines the piece
    /// sits in the middle of.
    pub fn completes_line(&self, column: usize, row: usize, win_length: usize) -> bool {
        let Some(player) = self.get(column, row) else {
            return false;
        };

        DIRECTIONS.iter().any(|&dir| {
            let mut count = 1;
            for sign in [1, -1] {
                let mut k = 1;
                while let Some((c, r)) = self.offset(column, row, dir, sign * k) {
                    if self.get(c, r) != Some(player) {
                        break;
                    }
                    count += 1;
                    k += 1;
                }
            }
            count >= win_length
        })
    }
}
