//! Static game configuration

use super::{
    board::Board,
    error::{EngineError, EngineResult},
};

/// Shape of the board and the run length needed to win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub win_length: usize,
}

impl GameConfig {
    pub fn new(columns: usize, rows: usize, win_length: usize) -> EngineResult<Self> {
        let config = Self { columns, rows, win_length };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        validate_dimensions(self.columns, self.rows)?;
        validate_win_length(self.win_length)
    }

    /// Empty board with this configuration's shape
    pub fn new_board(&self) -> EngineResult<Board> {
        Board::new(self.columns, self.rows)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 6,
            win_length: 4,
        }
    }
}

/// Largest number of cells a board may have
pub const MAX_CELLS: usize = 1 << 16;

pub fn validate_dimensions(columns: usize, rows: usize) -> EngineResult<()> {
    let cells = columns.checked_mul(rows);
    if columns == 0 || rows == 0 || cells.map_or(true, |cells| cells > MAX_CELLS) {
        return Err(EngineError::InvalidConfiguration(format!(
            "board must have between 1 and {} cells, got {}x{}",
            MAX_CELLS, columns, rows
        )));
    }
    Ok(())
}

pub fn validate_win_length(win_length: usize) -> EngineResult<()> {
    if win_length < 2 {
        return Err(EngineError::InvalidConfiguration(format!(
            "win length must be at least 2, got {}",
            win_length
        )));
    }
    Ok(())
}
