//! Scoped trial placements for heuristics that probe hypothetical moves

use crate::core::{Board, EngineResult, Move, Player};

/// A piece dropped for inspection only; taken back when the guard drops.
///
/// Because the undo lives in `Drop`, the placement is rolled back on every
/// exit path, early returns and `?` included.
pub struct TrialMove<'b> {
    board: &'b mut Board,
    player: Player,
    landing: Move,
}

impl<'b> TrialMove<'b> {
    pub fn place(board: &'b mut Board, player: Player, column: usize) -> EngineResult<Self> {
        let landing = board.play(player, column)?;
        Ok(Self { board, player, landing })
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    /// Mutable access for nested trials; any further placement must itself
    /// be guarded so the board is back to this trial's state when it ends
    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }

    pub fn landing(&self) -> Move {
        self.landing
    }

    /// Whether the trial piece completes a run of `win_length`
    pub fn wins(&self, win_length: usize) -> bool {
        self.board
            .completes_line(self.landing.column, self.landing.row, win_length)
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        let undone = self.board.undo_move(self.landing.column);
        debug_assert_eq!(undone, Ok(self.player), "trial move rollback failed");
    }
}

/// Columns where `player` would complete a line with their next drop
pub fn winning_columns(scratch: &mut Board, player: Player, win_length: usize) -> Vec<usize> {
    let columns = scratch
        .legal_columns()
        .into_iter()
        .map(|mv| mv.column)
        .collect::<Vec<_>>();

    columns
        .into_iter()
        .filter(|&column| {
            TrialMove::place(&mut *scratch, player, column)
                .map(|trial| trial.wins(win_length))
                .unwrap_or(false)
        })
        .collect()
}
