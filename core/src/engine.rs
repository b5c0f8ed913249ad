use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Derived view of the game lifecycle. `Won` and `Tied` are terminal until
/// the engine is reset.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    InProgress,
    Won,
    Tied,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Tied)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Placed,
    Won,
}

impl MoveOutcome {
    pub const fn ended_game(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Represents one game session from the first move until reset.
///
/// The engine is driven synchronously by a single caller: validate a move,
/// apply it, query win/tie status, and rotate the turn when the game goes
/// on. Win detection runs inside [`GameEngine::apply_move`]; tie detection
/// is recomputed on every [`GameEngine::is_tie`] call, so the caller must
/// stop issuing moves itself once the board fills up without a winner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    players: Vec<Player>,
    board: Array2<BoardCell>,
    win_lines: Vec<WinLine>,
    current_player: usize,
    winner: Option<usize>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let GameConfig {
            players,
            board_size,
        } = config;
        let win_lines = derive_win_lines(board_size);
        log::debug!(
            "new game: {} players on a {}x{} board, {} win lines",
            players.len(),
            board_size,
            board_size,
            win_lines.len(),
        );

        Ok(Self {
            players,
            board: Array2::default((board_size, board_size).to_nd_index()),
            win_lines,
            current_player: 0,
            winner: None,
        })
    }

    /// Discards the whole aggregate and rebuilds it as a fresh construction
    /// would. There is no partial reset of sub-fields.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    pub fn size(&self) -> Coord {
        self.board.dim().0.try_into().unwrap()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Advances the turn cyclically through the ordering fixed at
    /// construction, wrapping from last to first indefinitely. Call only
    /// when the applied move did not end the game.
    pub fn next_player(&mut self) -> &Player {
        self.current_player = (self.current_player + 1) % self.players.len();
        let player = &self.players[self.current_player];
        log::trace!("turn passes to {} ({})", player.name, player.mark);
        player
    }

    pub fn cell_at(&self, coords: Coord2) -> BoardCell {
        self.board[coords.to_nd_index()]
    }

    pub fn win_lines(&self) -> &[WinLine] {
        &self.win_lines
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winner.map(|index| &self.win_lines[index])
    }

    /// Recomputed from a full board scan on every call, never cached.
    pub fn is_tie(&self) -> bool {
        self.winner.is_none() && self.board.iter().all(|cell| !cell.is_empty())
    }

    pub fn state(&self) -> EngineState {
        if self.has_winner() {
            EngineState::Won
        } else if self.is_tie() {
            EngineState::Tied
        } else {
            EngineState::InProgress
        }
    }

    /// True iff the coordinates are in bounds, the cell is unoccupied, and
    /// no winner has been declared. A declared winner freezes the board
    /// even for empty cells. A full board without a winner is not checked
    /// here; the caller stops on [`GameEngine::is_tie`] instead.
    pub fn is_valid_move(&self, coords: Coord2) -> bool {
        self.validate_coords(coords).is_ok()
            && self.winner.is_none()
            && self.cell_at(coords).is_empty()
    }

    /// Writes `mark` into the target cell and scans for a completed line.
    /// The first completed line in derivation order (rows, columns, main
    /// diagonal, anti-diagonal) is recorded and the scan stops there.
    pub fn apply_move(&mut self, coords: Coord2, mark: Mark) -> Result<MoveOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_no_winner()?;
        if !self.cell_at(coords).is_empty() {
            return Err(GameError::CellOccupied);
        }

        self.board[coords.to_nd_index()] = BoardCell::Marked(mark);
        log::debug!("placed {:?} at {:?}", mark, coords);

        let completed = self
            .win_lines
            .iter()
            .position(|line| self.line_completed(line));

        Ok(if let Some(index) = completed {
            self.winner = Some(index);
            log::debug!("game won on line {:?}", self.win_lines[index].kind());
            MoveOutcome::Won
        } else {
            MoveOutcome::Placed
        })
    }

    /// A line is completed when all of its cells carry one identical mark.
    fn line_completed(&self, line: &WinLine) -> bool {
        let mut marks = line.cells().iter().map(|&coords| self.cell_at(coords).mark());
        match marks.next() {
            Some(Some(first)) => marks.all(|mark| mark == Some(first)),
            _ => false,
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    fn check_no_winner(&self) -> Result<()> {
        if self.winner.is_none() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}
