use crate::ai::{Agent, AgentKind};
use crate::core::{Board, FromIndex, GameConfig, Outcome, Player};

use super::options::EngineOptions;
use super::search::SearchOptions;

use anyhow::{Context, Result};
use log::{debug, log_enabled, Level};
use std::time::Instant;

/// Engine manages the current game and answers search requests with the selected agent
pub struct Engine {
    pub config: GameConfig,
    pub board: Board,
    pub options: EngineOptions,
    agent: Box<dyn Agent>,
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        let options = EngineOptions::default();
        Self {
            config: GameConfig::default(),
            board: Board::default(),
            agent: options.agent.build(options.seed),
            options,
        }
    }

    /// Start a fresh game with the given board shape and win length
    pub fn set_game(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.board = config.new_board()?;
        self.config = config;
        Ok(())
    }

    /// Replace the board, keeping the win length
    pub fn set_board(&mut self, board: Board) {
        self.config.columns = board.columns();
        self.config.rows = board.rows();
        self.board = board;
    }

    pub fn set_position_fen(&mut self, fen: &str) -> Result<()> {
        let board = Board::from_fen(fen)?;
        self.set_board(board);
        Ok(())
    }

    /// Empty board followed by `moves`, alternating from player one
    pub fn set_startpos(&mut self, moves: &[usize]) -> Result<()> {
        let mut board = self.config.new_board()?;
        for (i, &column) in moves.iter().enumerate() {
            let player = Player::from_index(i % 2)?;
            board
                .play(player, column)
                .with_context(|| format!("invalid move {} in startpos", column))?;
        }
        self.board = board;
        Ok(())
    }

    /// Set engine options, rebuilding the agent when its kind or seed changes
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        let previous = self.options.clone();
        self.options.set_option(name, value)?;

        if previous.agent != self.options.agent || previous.seed != self.options.seed {
            self.agent = self.options.agent.build(self.options.seed);
        }
        Ok(())
    }

    pub fn agent_kind(&self) -> AgentKind {
        self.options.agent
    }

    /// Drop a piece for whoever is next by piece-count parity
    pub fn play(&mut self, column: usize) -> Result<Outcome> {
        ensure_ongoing(self.outcome())?;
        let player = self.board.next_to_move();
        self.board.play(player, column)?;

        if log_enabled!(Level::Debug) {
            debug!("player {} played column {}\n{}", player.number(), column, self.board);
        }
        Ok(self.outcome())
    }

    pub fn undo(&mut self, column: usize) -> Result<Player> {
        Ok(self.board.undo_move(column)?)
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate_outcome(self.config.win_length)
    }

    /// Search for the player to move and return the column, the nodes
    /// explored and the elapsed time in seconds
    pub fn go(&mut self, search_options: &SearchOptions) -> Result<(usize, u64, f64)> {
        let player = self.board.next_to_move();
        let config = search_options.to_config(self.config.win_length, self.options.heuristic);

        let start_time = Instant::now();
        let column = self.agent.search(&self.board, player, &config)?;
        let time = start_time.elapsed().as_secs_f64();

        debug!(
            "{} agent chose column {} for player {} in {:.3}s",
            self.options.agent,
            column,
            player.number(),
            time
        );

        Ok((column, self.agent.nodes_explored(), time))
    }

    pub fn display(&self) -> String {
        self.board.snapshot()
    }

    pub fn get_fen(&self) -> String {
        self.board.to_fen()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ongoing(outcome: Outcome) -> Result<()> {
    anyhow::ensure!(!outcome.is_terminal(), "game is already over: {}", outcome);
    Ok(())
}
