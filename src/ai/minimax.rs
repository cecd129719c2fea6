//! Depth-limited minimax with alpha-beta pruning.
//!
//! Polarity is fixed by depth: even plies maximize for the root player and
//! drop the root player's piece, odd plies minimize and drop the opponent's.
//! Move order is shuffled at every node with the agent's own random source,
//! so equal-valued moves are picked differently unless the seed is pinned.

use log::debug;
use rand::{prelude::*, rngs::StdRng};
use std::time::Instant;

use crate::core::{Board, EngineError, EngineResult, Outcome, Player};
use crate::heuristics::Heuristic;

use super::{
    agent::Agent,
    search::{searchable_columns, SearchConfig},
};

/// Bound on the score of a decided position: a win scores `SENTINEL - ply`
/// and a loss `-SENTINEL + ply`. The ply offset only orders decided
/// positions among themselves, a quicker win above a slower one. Every such
/// score stays outside ±[`HEURISTIC_BOUND`].
pub const SENTINEL: i32 = 9_999_999;

/// Heuristic scores are clamped into ±`HEURISTIC_BOUND`, keeping every
/// decided position strictly outside the heuristic range.
pub const HEURISTIC_BOUND: i32 = 999_999;

pub struct Minimax {
    rng: StdRng,
    alpha_beta: bool,
    nodes_explored: u64,
}

/// Parameters fixed for the whole search
struct Root<'h> {
    player: Player,
    win_length: usize,
    heuristic: &'h dyn Heuristic,
}

impl Minimax {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            alpha_beta: true,
            nodes_explored: 0,
        }
    }

    /// Same search without pruning: every sibling is explored
    pub fn full_width(rng: StdRng) -> Self {
        Self {
            alpha_beta: false,
            ..Self::new(rng)
        }
    }

    /// Search with an arbitrary heuristic, not just the built-in registry
    pub fn search_with(
        &mut self,
        board: &Board,
        player: Player,
        config: &SearchConfig,
        heuristic: &dyn Heuristic,
    ) -> EngineResult<usize> {
        let legal = searchable_columns(board, config)?;
        self.nodes_explored = 0;

        // Fixed opening
        if board.is_empty() {
            return Ok(board.columns() / 2);
        }

        if config.depth == 0 {
            return legal
                .choose(&mut self.rng)
                .map(|mv| mv.column)
                .ok_or(EngineError::NoLegalMove);
        }

        let start_time = Instant::now();
        let root = Root {
            player,
            win_length: config.win_length,
            heuristic,
        };

        let (column, value) = self.minimax(&root, board, config.depth, 0, i32::MIN, i32::MAX)?;

        debug!(
            "minimax depth {} chose {:?} value {} after {} nodes in {:.3}s",
            config.depth,
            column,
            value,
            self.nodes_explored,
            start_time.elapsed().as_secs_f64()
        );

        column.ok_or(EngineError::NoLegalMove)
    }

    fn terminal_value(outcome: Outcome, player: Player, ply: u32) -> i32 {
        match outcome {
            Outcome::Win(winner) if winner == player => SENTINEL - ply as i32,
            Outcome::Win(_) => -SENTINEL + ply as i32,
            _ => 0,
        }
    }

    /// Returns the best column at this node (if any child was explored) and
    /// its value from the root player's point of view
    fn minimax(
        &mut self,
        root: &Root<'_>,
        board: &Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> EngineResult<(Option<usize>, i32)> {
        self.nodes_explored += 1;

        let mut columns = board
            .legal_columns()
            .into_iter()
            .map(|mv| mv.column)
            .collect::<Vec<_>>();
        columns.shuffle(&mut self.rng);

        let outcome = board.evaluate_outcome(root.win_length);
        if outcome.is_terminal() || columns.is_empty() {
            return Ok((None, Self::terminal_value(outcome, root.player, ply)));
        }

        if depth == 0 {
            let score = root
                .heuristic
                .evaluate(board, root.player, root.win_length)
                .clamp(-HEURISTIC_BOUND, HEURISTIC_BOUND);
            return Ok((None, score));
        }

        let maximizing = ply % 2 == 0;
        let mover = if maximizing { root.player } else { root.player.opponent() };

        let mut best_column = None;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

        for column in columns {
            let child = board.apply_move(mover, column)?;
            let (_, value) = self.minimax(root, &child, depth - 1, ply + 1, alpha, beta)?;

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                beta = beta.min(best_value);
            }

            if self.alpha_beta && alpha >= beta {
                break;
            }
        }

        Ok((best_column, best_value))
    }
}

impl Agent for Minimax {
    fn search(&mut self, board: &Board, player: Player, config: &SearchConfig) -> EngineResult<usize> {
        let heuristic = config.heuristic;
        self.search_with(board, player, config, &heuristic)
    }

    fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }
}
