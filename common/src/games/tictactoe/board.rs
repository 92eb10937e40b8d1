use std::fmt;
use std::str::FromStr;

use super::error::GameError;
use super::types::{BOARD_SIZE, BOARD_WIDTH, Cell, Side};
use super::win_detector::wins;

/// 3x3 grid in row-major order, index = row * 3 + col.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from externally supplied cells, rejecting wrong lengths
    /// and positions where both sides hold a line.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, GameError> {
        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| GameError::InvalidBoardLength { found: cells.len() })?;
        let board = Self { cells };

        if wins(&board, Side::Maximizer) && wins(&board, Side::Minimizer) {
            return Err(GameError::BothSidesWin);
        }
        Ok(board)
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Accepts 9 symbols (`X`, `O`, `_`, `.` or space); newlines and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|&ch| ch != '\n' && ch != '\r' && ch != '|')
            .map(|ch| Cell::from_symbol(ch).ok_or(GameError::InvalidCell { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
