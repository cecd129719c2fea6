use std::fmt;
use colored::Colorize;

use super::{
    board::{Board, Outcome},
    side::Player,
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows()).rev() {
            for column in 0..self.columns() {
                match self.get(column, row) {
                    Some(player) => write!(f, "{} ", player)?,
                    None => write!(f, "{} ", "·".dimmed())?,
                }
            }
            writeln!(f)?;
        }

        // Column numbers under the grid
        for column in 0..self.columns() {
            write!(f, "{} ", column % 10)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "{}", "1".bright_red()),
            Player::Two => write!(f, "{}", "2".bright_green()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(player) => write!(f, "win {}", player.number()),
        }
    }
}
