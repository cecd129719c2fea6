/// Configuration options for the engine
use anyhow::{Context, Result, bail};

use crate::ai::AgentKind;
use crate::heuristics::HeuristicKind;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Search algorithm answering `go`
    pub agent: AgentKind,
    /// Leaf evaluation used by minimax
    pub heuristic: HeuristicKind,
    /// Whether protocol errors abort the engine
    pub strict_mode: bool,
    /// Seed for the agent's random source; `None` draws a fresh one
    pub seed: Option<u64>,
}

impl EngineOptions {
    pub fn new(agent: AgentKind, heuristic: HeuristicKind, strict_mode: bool, seed: Option<u64>) -> Self {
        Self {
            agent,
            heuristic,
            strict_mode,
            seed,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "agent" => self.agent = value.parse()?,
            "heuristic" => self.heuristic = value.parse()?,
            "strictmode" => self.strict_mode = value.parse().context("invalid strictmode")?,
            "seed" => {
                self.seed = match value {
                    "none" => None,
                    v => Some(v.parse().context("invalid seed")?),
                }
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            agent: AgentKind::default(),
            heuristic: HeuristicKind::default(),
            strict_mode: false,
            seed: None,
        }
    }
}
