//! connectw - search engine for connect-W games on a gravity grid

pub mod ai;
pub mod core;
pub mod engine;
pub mod heuristics;
pub mod utils;

// Re-export commonly used items
pub use ai::{Agent, AgentKind, Mcts, Minimax, SearchConfig};
pub use core::{Board, EngineError, GameConfig, Outcome, Player};
pub use engine::Engine;
pub use heuristics::{Heuristic, HeuristicKind};
