mod board;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use error::GameError;
pub use game_state::{GameResult, GameSnapshot, TicTacToeGame};
pub use types::{
    BoardSize, Cell, FirstPlayerMode, GameOutcome, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Position,
    WinningLine,
};
pub use win_detector::check_win_with_line;
