use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::error::GameError;
use super::evaluator::{WIN_SCORE, evaluate};
use super::types::{Cell, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    #[default]
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub index: usize,
    pub score: i32,
}

/// Picks a move for the automated player. Neither bot is consulted on a full board.
pub fn calculate_move(
    kind: BotKind,
    board: &Board,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match kind {
        BotKind::Minimax => {
            let mut board = *board;
            find_optimal_move(&mut board)
        }
        BotKind::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Game-theoretic value of `board` for the maximizer, searching the whole remaining tree.
///
/// Wins are worth `10 - depth` and losses `-10 + depth`, so faster wins and slower
/// losses rank higher. Every tentative mark is cleared before the next sibling is
/// tried; the board is unchanged when this returns.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    let score = evaluate(board);

    if score == WIN_SCORE {
        return score - depth;
    }

    if score == -WIN_SCORE {
        return score + depth;
    }

    if board.is_full() {
        return 0;
    }

    let (mark, mut best_score) = if maximizing {
        (Cell::Maximizer, i32::MIN)
    } else {
        (Cell::Minimizer, i32::MAX)
    };

    for index in board.available_moves() {
        board.set(index, mark);
        let score = minimax(board, depth + 1, !maximizing);
        board.set(index, Cell::Empty);

        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// Value of every empty cell for the maximizer, in ascending index order.
pub fn score_moves(board: &mut Board) -> Vec<MoveScore> {
    let mut scores = Vec::new();
    for index in board.available_moves() {
        board.set(index, Cell::from(Side::Maximizer));
        let score = minimax(board, 0, false);
        board.set(index, Cell::Empty);
        scores.push(MoveScore { index, score });
    }
    scores
}

/// Picks from already computed scores. Ties keep the first entry, so the
/// ascending order of `score_moves` makes the lowest index win.
pub fn best_move(scores: &[MoveScore]) -> Result<usize, GameError> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &MoveScore { index, score } in scores {
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

/// Best cell for the maximizer. Ties keep the lowest index.
pub fn find_optimal_move(board: &mut Board) -> Result<usize, GameError> {
    best_move(&score_moves(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::wins;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_own_row() {
        let mut b = board("OO_XX____");
        let before = b;
        let index = find_optimal_move(&mut b).unwrap();
        assert_eq!(index, 2);
        assert_eq!(b, before);

        b.set(index, Cell::Maximizer);
        assert!(wins(&b, Side::Maximizer));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut b = board("XX__O____");
        assert_eq!(find_optimal_move(&mut b), Ok(2));
    }

    #[test]
    fn test_answers_corner_pressure_with_edge() {
        let mut b = board("X___O___X");
        let scores = score_moves(&mut b);
        for corner in [2, 6] {
            let corner_score = scores.iter().find(|s| s.index == corner).unwrap().score;
            assert!(corner_score < 0, "corner {} should lose, got {}", corner, corner_score);
        }
        assert_eq!(find_optimal_move(&mut b), Ok(1));
    }

    #[test]
    fn test_prefers_faster_win() {
        // 5 wins at once; 1 forks and wins one round later.
        let mut b = board("X__OO___X");
        let scores = score_moves(&mut b);
        let score_of = |index: usize| scores.iter().find(|s| s.index == index).unwrap().score;
        assert_eq!(score_of(5), WIN_SCORE);
        assert_eq!(score_of(1), WIN_SCORE - 2);
        assert!(scores.iter().all(|s| s.index == 5 || s.score < WIN_SCORE));
        assert_eq!(find_optimal_move(&mut b), Ok(5));
    }

    #[test]
    fn test_loss_is_postponed() {
        // Minimizer threatens 2 and 6; whatever is blocked, the other completes.
        let mut b = board("XX_XOO___");
        for MoveScore { score, .. } in score_moves(&mut b) {
            assert_eq!(score, -WIN_SCORE + 1);
        }
        let mut lost = board("XXXO_O___");
        assert_eq!(minimax(&mut lost, 3, true), -WIN_SCORE + 3);
    }

    #[test]
    fn test_draw_scores_zero_regardless_of_depth() {
        let mut full = board("XOXXOOOXX");
        assert_eq!(minimax(&mut full, 0, true), 0);
        assert_eq!(minimax(&mut full, 7, false), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(minimax(&mut b, 0, true), 0);
        assert_eq!(minimax(&mut b, 0, false), 0);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_best_move_keeps_first_of_equal_scores() {
        let scores = [
            MoveScore { index: 3, score: -9 },
            MoveScore { index: 5, score: 0 },
            MoveScore { index: 7, score: 0 },
        ];
        assert_eq!(best_move(&scores), Ok(5));
        assert_eq!(best_move(&[]), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_best_move_agrees_with_search() {
        let mut b = board("X___O___X");
        let scores = score_moves(&mut b);
        assert_eq!(best_move(&scores), find_optimal_move(&mut b));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOXXOOOXX");
        assert_eq!(find_optimal_move(&mut b), Err(GameError::NoLegalMove));
        let mut rng = SessionRng::new(7);
        assert_eq!(
            calculate_move(BotKind::Random, &b, &mut rng),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_random_bot_picks_empty_cells() {
        let b = board("XO_XO_O_X");
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let index = calculate_move(BotKind::Random, &b, &mut rng).unwrap();
            assert!(b.is_empty(index));
        }
    }

    #[test]
    fn test_calculate_move_leaves_input_untouched() {
        let b = board("X___O____");
        let mut rng = SessionRng::new(1);
        let index = calculate_move(BotKind::Minimax, &b, &mut rng).unwrap();
        assert!(b.is_empty(index));
        assert_eq!(b, board("X___O____"));
    }
}
