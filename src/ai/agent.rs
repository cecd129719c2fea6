//! The uniform search entry point and the registry of agents

use anyhow::bail;
use rand::{prelude::*, rngs::StdRng};
use std::{fmt, str::FromStr};

use crate::core::{Board, EngineError, EngineResult, Player};
use crate::utils::make_rng;

use super::{
    mcts::Mcts,
    minimax::Minimax,
    search::{searchable_columns, SearchConfig},
};

/// Something that picks a column for `player` on `board`
pub trait Agent {
    fn search(&mut self, board: &Board, player: Player, config: &SearchConfig) -> EngineResult<usize>;

    /// Work done by the last search: nodes for minimax, iterations for MCTS
    fn nodes_explored(&self) -> u64 {
        0
    }
}

/// Uniformly random legal move
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn search(&mut self, board: &Board, _: Player, config: &SearchConfig) -> EngineResult<usize> {
        let legal = searchable_columns(board, config)?;
        legal
            .choose(&mut self.rng)
            .map(|mv| mv.column)
            .ok_or(EngineError::NoLegalMove)
    }
}

/// Registry of the available agents, keyed by a stable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Random,
    Minimax,
    Mcts,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Random, AgentKind::Minimax, AgentKind::Mcts];

    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::Mcts => "mcts",
        }
    }

    /// Instantiate the agent with its own random source
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Agent> {
        let rng = make_rng(seed);
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(rng)),
            AgentKind::Minimax => Box::new(Minimax::new(rng)),
            AgentKind::Mcts => Box::new(Mcts::new(rng)),
        }
    }
}

impl Default for AgentKind {
    fn default() -> Self {
        AgentKind::Minimax
    }
}

impl FromStr for AgentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match AgentKind::ALL.iter().find(|kind| kind.name() == s) {
            Some(kind) => Ok(*kind),
            None => bail!("Unknown agent type: {}", s),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
