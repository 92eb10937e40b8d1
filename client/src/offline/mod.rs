mod human_input;
mod tictactoe_runner;

pub use tictactoe_runner::{GameSettings, run_tictactoe_game};
