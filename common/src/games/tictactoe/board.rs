use std::fmt;

use super::types::{BoardSize, Cell, Mark, Position};

/// Square grid of cells. The side length is fixed when the board is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        let side = size.get();
        Self {
            size,
            cells: vec![vec![None; side]; side],
        }
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Writes `mark` into the cell. The caller has already checked bounds and emptiness.
    pub(super) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = Some(mark);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(Option::is_some))
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Empty positions in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => f.write_str("_")?,
                }
            }
        }
        Ok(())
    }
}
