use super::board::Board;
use super::types::Side;
use super::win_detector::wins;

pub const WIN_SCORE: i32 = 10;

/// Static score from the automated player's point of view. Depth is applied by the search.
pub fn evaluate(board: &Board) -> i32 {
    if wins(board, Side::Minimizer) {
        -WIN_SCORE
    } else if wins(board, Side::Maximizer) {
        WIN_SCORE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        assert_eq!(evaluate(&"OOOXX____".parse().unwrap()), 10);
        assert_eq!(evaluate(&"XXXOO_O__".parse().unwrap()), -10);
        assert_eq!(evaluate(&"XOXXOOOXX".parse().unwrap()), 0);
        assert_eq!(evaluate(&Board::new()), 0);
    }
}
