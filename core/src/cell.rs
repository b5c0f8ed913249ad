use serde::{Deserialize, Serialize};

/// The single-character token a player places on the board.
pub type Mark = char;

/// Canonical per-cell state stored by the gameplay engine. An unoccupied
/// cell is a distinct variant, never a mark value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Empty,
    Marked(Mark),
}

impl BoardCell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::Empty
    }
}
