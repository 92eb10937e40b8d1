use std::io::{self, Write};

use crossterm::style::Stylize;
use tikito_common::games::tictactoe::{
    BOARD_SIZE, BOARD_WIDTH, Board, Cell, MoveScore, Side, winner, winning_line,
};

/// Terminal rendering for a game against the AI. The human plays `X`, the AI plays `O`.
pub struct TicTacToeGameUi<W: Write> {
    out: W,
}

impl<W: Write> TicTacToeGameUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render_welcome(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\n\n{}\n\n",
            "Welcome to tikito, a Tic-Tac-Toe game against AI.".green()
        )?;
        for line in [
            "=> The same rules in normal Tic-Tac-Toe game applies.",
            "=> The board will print after each move whether your move or AI's move.",
            "=> Try to beat him and most importantly have fun! Let's begin...",
        ] {
            writeln!(self.out, "{}", line.green())?;
        }
        writeln!(self.out)
    }

    pub fn render_players_info(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("You are {}", Side::Minimizer.symbol()).red()
        )?;
        writeln!(
            self.out,
            "{}",
            format!("AI is {}", Side::Maximizer.symbol()).magenta()
        )
    }

    /// Empty cells show the 1-based number the player types to claim them.
    pub fn render_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.out)?;
        for index in 0..BOARD_SIZE {
            write!(self.out, "{}", "|".cyan())?;
            let label = match board.get(index) {
                Cell::Empty => format!(" {} ", index + 1).yellow(),
                Cell::Maximizer => format!(" {} ", Cell::Maximizer.symbol()).magenta(),
                Cell::Minimizer => format!(" {} ", Cell::Minimizer.symbol()).red(),
            };
            write!(self.out, "{}", label)?;
            if index % BOARD_WIDTH == BOARD_WIDTH - 1 {
                writeln!(self.out, "{} ", "|".cyan())?;
            }
        }
        writeln!(self.out)
    }

    pub fn render_move_scores(&mut self, scores: &[MoveScore]) -> io::Result<()> {
        let summary = scores
            .iter()
            .map(|s| format!("{}:{}", s.index + 1, s.score))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{}", format!("Move values: {}", summary).blue())
    }

    pub fn render_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "--> Your turn, make your move: ")?;
        self.out.flush()
    }

    pub fn render_rejected_move(&mut self) -> io::Result<()> {
        writeln!(self.out, "You cannot make that move. Try again.")
    }

    pub fn render_ai_turn(&mut self) -> io::Result<()> {
        writeln!(self.out, "--> AI's turn")
    }

    pub fn render_after_move(&mut self, side: Side, board: &Board) -> io::Result<()> {
        match side {
            Side::Minimizer => writeln!(self.out, "Board after your turn:")?,
            Side::Maximizer => writeln!(self.out, "Board after AI's turn ")?,
        }
        self.render_board(board)
    }

    /// Reports the result of a finished board, naming the completed line by cell numbers.
    pub fn render_outcome(&mut self, board: &Board) -> io::Result<()> {
        let verdict = match winner(board) {
            Some(Side::Minimizer) => "You won!",
            Some(Side::Maximizer) => "AI won!",
            None => "Draw!",
        };
        writeln!(self.out, "Game is over. {}", verdict)?;
        if let Some(line) = winning_line(board) {
            let cells = line.map(|index| (index + 1).to_string()).join("-");
            writeln!(self.out, "Winning line: {}", cells)?;
        }
        Ok(())
    }
}
