use crate::core::side::Player;

/// Contents of a single cell: empty or holding a player's piece
pub type Cell = Option<Player>;

/// A C-column by R-row connect board.
///
/// Cells are stored column-major with row 0 at the bottom. Pieces in a
/// column are always contiguous from row 0 upward; `heights` caches the
/// number of pieces per column and is kept in step by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) heights: Vec<usize>,
}

/// A legal drop: the column and the row the piece lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

/// Result of evaluating a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}
