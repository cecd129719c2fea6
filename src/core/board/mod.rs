//! Board representation and rules

pub mod definitions;
pub mod fen;
pub mod outcome;

pub use definitions::{Board, Cell, Move, Outcome};

use crate::core::{
    error::{EngineError, EngineResult},
    game::{validate_dimensions, GameConfig},
    side::Player,
};

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> EngineResult<Self> {
        validate_dimensions(columns, rows)?;
        Ok(Self::empty(columns, rows))
    }

    /// Callers must have validated the dimensions
    fn empty(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
            heights: vec![0; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    /// Cell at (column, row); out-of-range coordinates read as empty
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Cell {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[self.index(column, row)]
    }

    /// Number of pieces in a column
    pub fn occupied_in_column(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Row the next piece dropped in `column` would land on
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        let height = *self.heights.get(column)?;
        (height < self.rows).then_some(height)
    }

    pub fn is_empty(&self) -> bool {
        self.heights.iter().all(|&h| h == 0)
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h >= self.rows)
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }

    pub fn total_pieces(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Legal drops in ascending column order
    pub fn legal_columns(&self) -> Vec<Move> {
        (0..self.columns)
            .filter_map(|column| {
                self.landing_row(column).map(|row| Move { column, row })
            })
            .collect()
    }

    /// Player to move inferred from piece counts: whoever has fewer pieces,
    /// player one on a tie
    pub fn next_to_move(&self) -> Player {
        if self.piece_count(Player::One) <= self.piece_count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Drop a piece for `player` in place
    pub fn play(&mut self, player: Player, column: usize) -> EngineResult<Move> {
        let row = self
            .landing_row(column)
            .ok_or(EngineError::IllegalMove { column })?;

        let idx = self.index(column, row);
        self.cells[idx] = Some(player);
        self.heights[column] += 1;

        Ok(Move { column, row })
    }

    /// Drop a piece for `player`, returning the resulting board
    pub fn apply_move(&self, player: Player, column: usize) -> EngineResult<Board> {
        let mut board = self.clone();
        board.play(player, column)?;
        Ok(board)
    }

    /// Remove the top piece of `column`, returning whose piece it was
    pub fn undo_move(&mut self, column: usize) -> EngineResult<Player> {
        let height = self.occupied_in_column(column);
        if column >= self.columns || height == 0 {
            return Err(EngineError::IllegalMove { column });
        }

        let idx = self.index(column, height - 1);
        let player = self.cells[idx]
            .take()
            .ok_or(EngineError::IllegalMove { column })?;
        self.heights[column] -= 1;

        Ok(player)
    }

    /// The single column whose piece count differs between the two boards
    pub fn changed_column(&self, other: &Board) -> Option<usize> {
        let mut changed = (0..self.columns.max(other.columns))
            .filter(|&column| self.occupied_in_column(column) != other.occupied_in_column(column));

        let column = changed.next()?;
        changed.next().is_none().then_some(column)
    }
}

impl Default for Board {
    /// Empty board of the default game shape
    fn default() -> Self {
        let config = GameConfig::default();
        Self::empty(config.columns, config.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_legal_columns() {
        let board = Board::new(7, 6).unwrap();
        let legal = board.legal_columns();

        assert_eq!(legal.len(), 7);
        for (i, mv) in legal.iter().enumerate() {
            assert_eq!(mv.column, i);
            assert_eq!(mv.row, 0);
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(Board::new(0, 6), Err(EngineError::InvalidConfiguration(_))));
        assert!(matches!(Board::new(7, 0), Err(EngineError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_apply_move_lands_on_lowest_empty_row() {
        let board = Board::new(7, 6).unwrap();
        let board = board.apply_move(Player::One, 3).unwrap();
        let board = board.apply_move(Player::Two, 3).unwrap();

        assert_eq!(board.get(3, 0), Some(Player::One));
        assert_eq!(board.get(3, 1), Some(Player::Two));
        assert_eq!(board.get(3, 2), None);
        assert_eq!(board.landing_row(3), Some(2));
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = Board::new(7, 6).unwrap();
        let next = board.apply_move(Player::One, 0).unwrap();

        assert!(board.is_empty());
        assert_eq!(next.total_pieces(), 1);
    }

    #[test]
    fn test_full_column_is_illegal() {
        let mut board = Board::new(7, 6).unwrap();
        for i in 0..6 {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board.play(player, 2).unwrap();
        }

        assert_eq!(
            board.apply_move(Player::One, 2),
            Err(EngineError::IllegalMove { column: 2 })
        );
        assert!(board.legal_columns().iter().all(|mv| mv.column != 2));
    }

    #[test]
    fn test_out_of_range_column_is_illegal() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(
            board.apply_move(Player::One, 7),
            Err(EngineError::IllegalMove { column: 7 })
        );
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = Board::new(5, 4).unwrap();
        for &(player, column) in &[(Player::One, 0), (Player::Two, 0), (Player::One, 3)] {
            board.play(player, column).unwrap();
        }
        let before = board.clone();

        board.play(Player::Two, 0).unwrap();
        assert_eq!(board.undo_move(0).unwrap(), Player::Two);
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_empty_column_is_illegal() {
        let mut board = Board::new(7, 6).unwrap();
        assert_eq!(board.undo_move(1), Err(EngineError::IllegalMove { column: 1 }));
        assert_eq!(board.undo_move(9), Err(EngineError::IllegalMove { column: 9 }));
    }

    #[test]
    fn test_next_to_move_by_parity() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(board.next_to_move(), Player::One);

        let board = board.apply_move(Player::One, 0).unwrap();
        assert_eq!(board.next_to_move(), Player::Two);

        let board = board.apply_move(Player::Two, 1).unwrap();
        assert_eq!(board.next_to_move(), Player::One);
    }

    #[test]
    fn test_changed_column() {
        let board = Board::new(7, 6).unwrap();
        let child = board.apply_move(Player::One, 4).unwrap();
        assert_eq!(child.changed_column(&board), Some(4));
        assert_eq!(board.changed_column(&board), None);

        let grandchild = child.apply_move(Player::Two, 1).unwrap();
        assert_eq!(grandchild.changed_column(&board), None);
    }
}
