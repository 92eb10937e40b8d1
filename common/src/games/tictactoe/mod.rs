mod board;
mod bot_controller;
mod error;
mod evaluator;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotKind, MoveScore, best_move, calculate_move, find_optimal_move, minimax, score_moves,
};
pub use error::GameError;
pub use evaluator::{WIN_SCORE, evaluate};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, BOARD_WIDTH, Cell, FirstPlayerMode, GameStatus, Side};
pub use win_detector::{WINNING_LINES, is_terminal, winner, winning_line, wins};
