//! Game-tree search: minimax with alpha-beta and Monte-Carlo tree search
pub mod agent;
pub mod mcts;
pub mod minimax;
pub mod search;

// Re-export key types
pub use agent::{Agent, AgentKind, RandomAgent};
pub use mcts::{Mcts, NodeId, Tree};
pub use minimax::{Minimax, HEURISTIC_BOUND, SENTINEL};
pub use search::SearchConfig;
