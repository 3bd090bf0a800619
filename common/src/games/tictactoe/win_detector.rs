use super::board::Board;
use super::types::{Position, WinningLine};

/// Scans rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal. Returns the first line made entirely of one mark.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();

    for row in 0..size {
        if let Some(line) = check_line(board, Position::new(row, 0), 0, 1) {
            return Some(line);
        }
    }

    for col in 0..size {
        if let Some(line) = check_line(board, Position::new(0, col), 1, 0) {
            return Some(line);
        }
    }

    if let Some(line) = check_line(board, Position::new(0, 0), 1, 1) {
        return Some(line);
    }

    check_line(board, Position::new(0, size - 1), 1, -1)
}

fn check_line(board: &Board, start: Position, d_row: usize, d_col: isize) -> Option<WinningLine> {
    let size = board.size();
    let mark = board.get(start).flatten()?;

    let mut end = start;
    for i in 1..size {
        let col = start.col.checked_add_signed(d_col * i as isize)?;
        let pos = Position::new(start.row + d_row * i, col);
        if board.get(pos).flatten() != Some(mark) {
            return None;
        }
        end = pos;
    }

    Some(WinningLine::new(mark, start, end))
}
