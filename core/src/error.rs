use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("At least two players are required")]
    NotEnoughPlayers,
    #[error("Player marks must be pairwise distinct")]
    DuplicateMark,
    #[error("Board size must be positive")]
    InvalidBoardSize,
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Cell already holds a mark")]
    CellOccupied,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
