//! Static evaluation functions for minimax leaves

pub mod center;
pub mod fork;
pub mod offdef;
pub mod sliding;
pub mod threat;
pub mod trial;
pub mod zero;

mod traits;
pub use traits::*;

pub use center::CenterHeuristic;
pub use fork::ForkHeuristic;
pub use offdef::OffenseDefenseHeuristic;
pub use sliding::SlidingWindowHeuristic;
pub use threat::ThreatHeuristic;
pub use trial::TrialMove;
pub use zero::ZeroHeuristic;

use anyhow::bail;
use std::{fmt, str::FromStr};

use crate::core::{Board, Player};

/// Registry of the built-in heuristics, keyed by a stable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Zero,
    SlidingWindow,
    Threat,
    Center,
    Fork,
    OffenseDefense,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 6] = [
        HeuristicKind::Zero,
        HeuristicKind::SlidingWindow,
        HeuristicKind::Threat,
        HeuristicKind::Center,
        HeuristicKind::Fork,
        HeuristicKind::OffenseDefense,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::SlidingWindow => "sliding",
            HeuristicKind::Threat => "threat",
            HeuristicKind::Center => "center",
            HeuristicKind::Fork => "fork",
            HeuristicKind::OffenseDefense => "offdef",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn evaluate(&self, board: &Board, player: Player, win_length: usize) -> i32 {
        match self {
            HeuristicKind::Zero => ZeroHeuristic.evaluate(board, player, win_length),
            HeuristicKind::SlidingWindow => {
                SlidingWindowHeuristic.evaluate(board, player, win_length)
            }
            HeuristicKind::Threat => ThreatHeuristic.evaluate(board, player, win_length),
            HeuristicKind::Center => CenterHeuristic.evaluate(board, player, win_length),
            HeuristicKind::Fork => ForkHeuristic.evaluate(board, player, win_length),
            HeuristicKind::OffenseDefense => {
                OffenseDefenseHeuristic.evaluate(board, player, win_length)
            }
        }
    }
}

impl Default for HeuristicKind {
    fn default() -> Self {
        HeuristicKind::SlidingWindow
    }
}

impl FromStr for HeuristicKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match HeuristicKind::ALL.iter().find(|kind| kind.name() == s) {
            Some(kind) => Ok(*kind),
            None => bail!("Unknown heuristic type: {}", s),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_round_trip() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.name().parse::<HeuristicKind>().unwrap(), kind);
        }
        assert!("bogus".parse::<HeuristicKind>().is_err());
    }
}
