use super::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "unsupported board size {size} (expected {min}..={max})",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    InvalidConfiguration { size: usize },
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("can't make a move on a finished game")]
    GameAlreadyOver,
}

impl GameError {
    pub fn invalid_configuration(size: usize) -> Self {
        Self::InvalidConfiguration { size }
    }

    pub fn out_of_bounds(row: usize, col: usize, size: usize) -> Self {
        Self::OutOfBounds { row, col, size }
    }

    pub fn cell_occupied(row: usize, col: usize) -> Self {
        Self::CellOccupied { row, col }
    }
}
