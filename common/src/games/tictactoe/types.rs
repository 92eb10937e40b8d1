use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The automated player.
    Maximizer,
    /// The human player.
    Minimizer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Maximizer => Side::Minimizer,
            Side::Minimizer => Side::Maximizer,
        }
    }

    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Maximizer,
    Minimizer,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Maximizer => 'O',
            Cell::Minimizer => 'X',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            '_' | '.' | ' ' => Some(Cell::Empty),
            'O' | 'o' => Some(Cell::Maximizer),
            'X' | 'x' => Some(Cell::Minimizer),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Maximizer => Cell::Maximizer,
            Side::Minimizer => Cell::Minimizer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Ai,
    Random,
}
