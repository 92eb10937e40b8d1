use super::board::Board;
use super::error::GameError;
use super::types::{BOARD_SIZE, Cell, GameStatus, Side};
use super::win_detector::winner;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_side: Side,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_side: Side) -> Self {
        Self {
            board: Board::new(),
            current_side: first_side,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, side: Side, index: usize) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if side != self.current_side {
            return Err(GameError::NotYourTurn {
                expected: self.current_side,
            });
        }

        if index >= BOARD_SIZE {
            return Err(GameError::IndexOutOfRange { index });
        }

        if !self.board.is_empty(index) {
            return Err(GameError::CellOccupied { index });
        }

        self.board.set(index, Cell::from(side));
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_side = self.current_side.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(side) = winner(&self.board) {
            self.status = GameStatus::Won(side);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}
