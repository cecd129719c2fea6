use anyhow::{bail, Context};

use std::str::FromStr;
use std::time::Duration;

use crate::ai::SearchConfig;
use crate::heuristics::HeuristicKind;

const DEFAULT_DEPTH: u32 = 4;
const DEFAULT_ITERATIONS: u32 = 1000;

/// Budget requested by a `go` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Minimax depth in plies
    pub depth: u32,
    /// MCTS iterations
    pub iterations: Option<u32>,
    /// MCTS time limit in milliseconds
    pub move_time: Option<u64>,
}

impl SearchOptions {
    pub fn to_config(&self, win_length: usize, heuristic: HeuristicKind) -> SearchConfig {
        // With neither budget given, fall back to a fixed iteration count
        let iterations = match (self.iterations, self.move_time) {
            (None, None) => Some(DEFAULT_ITERATIONS),
            (iterations, _) => iterations,
        };

        SearchConfig {
            win_length,
            depth: self.depth,
            iterations,
            move_time: self.move_time.map(Duration::from_millis),
            heuristic,
        }
    }
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "depth" if i + 1 < parts.len() => {
                    search_options.depth = parts[i + 1].parse().context("invalid depth")?;
                    i += 1;
                }
                "iterations" if i + 1 < parts.len() => {
                    let n = parts[i + 1].parse().context("invalid iterations")?;
                    search_options.iterations = Some(n);
                    i += 1;
                }
                "movetime" if i + 1 < parts.len() => {
                    let time = parts[i + 1].parse().context("invalid movetime")?;
                    search_options.move_time = Some(time);
                    i += 1;
                }
                p => bail!("invalid go argument {}", p)
            }
            i += 1;
        }
        Ok(search_options)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            iterations: None,
            move_time: None,
        }
    }
}
