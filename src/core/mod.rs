//! Core game representations and rules

pub mod board;
pub mod convert;
pub mod display;
pub mod error;
pub mod game;
pub mod side;

pub use board::{Board, Cell, Move, Outcome};
pub use convert::FromIndex;
pub use error::{EngineError, EngineResult};
pub use game::GameConfig;
pub use side::Player;
