use super::types::Side;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoLegalMove,
    IndexOutOfRange { index: usize },
    CellOccupied { index: usize },
    GameOver,
    NotYourTurn { expected: Side },
    InvalidBoardLength { found: usize },
    InvalidCell { ch: char },
    BothSidesWin,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoLegalMove => write!(f, "No legal move: the board is full"),
            GameError::IndexOutOfRange { index } => {
                write!(f, "Cell index {} is out of range", index)
            }
            GameError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn { expected } => {
                write!(f, "Not your turn, {:?} is to move", expected)
            }
            GameError::InvalidBoardLength { found } => {
                write!(f, "Board must have 9 cells, found {}", found)
            }
            GameError::InvalidCell { ch } => write!(f, "Invalid cell symbol '{}'", ch),
            GameError::BothSidesWin => write!(f, "Board has a winning line for both sides"),
        }
    }
}

impl std::error::Error for GameError {}
