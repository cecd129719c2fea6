//! Search configuration shared by every agent

use std::time::Duration;

use crate::core::{
    game::validate_win_length, Board, EngineError, EngineResult, Move,
};
use crate::heuristics::HeuristicKind;

/// Everything a search needs besides the board and the player to move
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Run length needed to win
    pub win_length: usize,
    /// Minimax depth limit, in plies
    pub depth: u32,
    /// MCTS iteration budget
    pub iterations: Option<u32>,
    /// MCTS wall-clock budget, checked between iterations
    pub move_time: Option<Duration>,
    /// Leaf evaluation for minimax
    pub heuristic: HeuristicKind,
}

impl SearchConfig {
    pub fn validate(&self) -> EngineResult<()> {
        validate_win_length(self.win_length)?;

        if self.iterations == Some(0) {
            return Err(EngineError::InvalidConfiguration(
                "iteration budget must be positive".to_string(),
            ));
        }
        if self.move_time == Some(Duration::ZERO) {
            return Err(EngineError::InvalidConfiguration(
                "time budget must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            win_length: 4,
            depth: 4,
            iterations: Some(1000),
            move_time: None,
            heuristic: HeuristicKind::default(),
        }
    }
}

/// Validate the config and return the root's legal moves, failing with
/// `NoLegalMove` when the board is full or already decided
pub(crate) fn searchable_columns(board: &Board, config: &SearchConfig) -> EngineResult<Vec<Move>> {
    config.validate()?;

    if board.evaluate_outcome(config.win_length).is_terminal() {
        return Err(EngineError::NoLegalMove);
    }

    let legal = board.legal_columns();
    if legal.is_empty() {
        return Err(EngineError::NoLegalMove);
    }
    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_budgets() {
        let config = SearchConfig { win_length: 1, ..SearchConfig::default() };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfiguration(_))));

        let config = SearchConfig { iterations: Some(0), ..SearchConfig::default() };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfiguration(_))));

        let config = SearchConfig {
            move_time: Some(Duration::ZERO),
            ..SearchConfig::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_decided_board_has_no_legal_move() {
        let mut board = Board::new(7, 6).unwrap();
        for _ in 0..4 {
            board.play(Player::One, 0).unwrap();
        }
        assert_eq!(
            searchable_columns(&board, &SearchConfig::default()),
            Err(EngineError::NoLegalMove)
        );
    }
}
