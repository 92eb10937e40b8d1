use super::board::Board;
use super::types::{Cell, Side};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn holds_line(board: &Board, line: &[usize; 3], cell: Cell) -> bool {
    line.iter().all(|&i| board.get(i) == cell)
}

pub fn wins(board: &Board, side: Side) -> bool {
    let cell = Cell::from(side);
    WINNING_LINES.iter().any(|line| holds_line(board, line, cell))
}

pub fn is_terminal(board: &Board) -> bool {
    wins(board, Side::Maximizer) || wins(board, Side::Minimizer) || board.is_full()
}

pub fn winner(board: &Board) -> Option<Side> {
    [Side::Maximizer, Side::Minimizer]
        .into_iter()
        .find(|&side| wins(board, side))
}

/// First line (in row, column, diagonal order) held by a single side.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|line| {
        let first = board.get(line[0]);
        first != Cell::Empty && holds_line(board, line, first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_rows_columns_and_diagonals() {
        assert!(wins(&board("OOO_XX___"), Side::Maximizer));
        assert!(wins(&board("X_OX_OX__"), Side::Minimizer));
        assert!(wins(&board("X_O_XO__X"), Side::Minimizer));
        assert!(wins(&board("X_O_OXO_X"), Side::Maximizer));
        assert!(!wins(&board("X_O_OXO_X"), Side::Minimizer));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!is_terminal(&Board::new()));
        assert!(!is_terminal(&board("OO_XX____")));
        assert!(is_terminal(&board("OOOXX____")));
        assert!(is_terminal(&board("XOXXOOOXX")));
    }

    #[test]
    fn test_draw_has_no_winner() {
        let full = board("XOXXOOOXX");
        assert_eq!(winner(&full), None);
        assert_eq!(winning_line(&full), None);
    }

    #[test]
    fn test_winner_and_line() {
        let b = board("XO_XO__O_");
        assert_eq!(winner(&b), Some(Side::Maximizer));
        assert_eq!(winning_line(&b), Some([1, 4, 7]));
    }
}
