use std::io::{self, BufRead, Write};

use tikito_common::games::tictactoe::{BOARD_SIZE, Board};

use crate::game_ui::TicTacToeGameUi;

/// Maps a typed cell number (1..=9) to a board index if that cell can be played.
pub fn parse_move(line: &str, board: &Board) -> Option<usize> {
    let number: usize = line.trim().parse().ok()?;
    if !(1..=BOARD_SIZE).contains(&number) {
        return None;
    }
    let index = number - 1;
    board.is_empty(index).then_some(index)
}

/// Prompts until a playable cell is entered. Closed input is an error.
pub fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    ui: &mut TicTacToeGameUi<W>,
    board: &Board,
) -> io::Result<usize> {
    let mut line = String::new();
    loop {
        ui.render_prompt()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was made",
            ));
        }

        if let Some(index) = parse_move(&line, board) {
            return Ok(index);
        }

        ui.render_rejected_move()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        let board: Board = "X________".parse().unwrap();
        assert_eq!(parse_move("5\n", &board), Some(4));
        assert_eq!(parse_move("  9 ", &board), Some(8));
        assert_eq!(parse_move("1", &board), None);
        assert_eq!(parse_move("0", &board), None);
        assert_eq!(parse_move("10", &board), None);
        assert_eq!(parse_move("-3", &board), None);
        assert_eq!(parse_move("abc", &board), None);
        assert_eq!(parse_move("", &board), None);
    }

    #[test]
    fn test_read_retries_until_valid() {
        let board: Board = "X________".parse().unwrap();
        let mut input = Cursor::new("1\nfoo\n3\n");
        let mut ui = TicTacToeGameUi::new(Vec::new());
        assert_eq!(read_human_move(&mut input, &mut ui, &board).unwrap(), 2);

        let text = String::from_utf8(ui.into_inner()).unwrap();
        assert_eq!(text.matches("You cannot make that move. Try again.").count(), 2);
        assert_eq!(text.matches("--> Your turn").count(), 3);
    }

    #[test]
    fn test_read_fails_on_eof() {
        let board = Board::new();
        let mut input = Cursor::new("12\n");
        let mut ui = TicTacToeGameUi::new(Vec::new());
        let err = read_human_move(&mut input, &mut ui, &board).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
