#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use lines::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod lines;
mod types;

/// One participant in the turn rotation. Immutable once the game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Free-form display name.
    pub name: String,
    pub mark: Mark,
    /// Cosmetic display accent (a colour name or similar), opaque to the
    /// engine and only echoed back to the presentation layer.
    pub accent: String,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark, accent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mark,
            accent: accent.into(),
        }
    }
}

/// Configuration for one game session: the fixed turn ordering and the
/// board size. Passed by value at every construction and reset; the engine
/// holds no process-wide defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: Vec<Player>,
    pub board_size: Coord,
}

impl GameConfig {
    pub fn new_unchecked(players: Vec<Player>, board_size: Coord) -> Self {
        Self {
            players,
            board_size,
        }
    }

    pub fn new(players: Vec<Player>, board_size: Coord) -> Result<Self> {
        let config = Self::new_unchecked(players, board_size);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|other| other.mark == player.mark) {
                return Err(GameError::DuplicateMark);
            }
        }

        if self.board_size == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.board_size, self.board_size)
    }
}
