use anyhow::{anyhow, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use super::convert::FromIndex;
use std::ops::Not;

/// Player in the game. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn all() -> [Player; 2] {
        [Player::One, Player::Two]
    }

    /// The player's number as printed on the board: 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(anyhow!("Invalid player number: {}", n)),
        }
    }

    pub fn opponent(self) -> Self {
        !self
    }
}

impl FromIndex for Player {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid player index: {}", idx))
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
