use std::io::{BufRead, Write};

use tikito_common::games::SessionRng;
use tikito_common::games::tictactoe::{
    BotKind, GameStatus, Side, TicTacToeGameState, best_move, calculate_move, score_moves,
};
use tikito_common::log;

use super::human_input::read_human_move;
use crate::game_ui::TicTacToeGameUi;

#[derive(Debug, Clone, Copy)]
pub struct GameSettings {
    pub first_side: Side,
    pub bot: BotKind,
    pub explain: bool,
    pub show_welcome: bool,
}

/// Plays one game, alternating human input with the bot until the board is terminal.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    settings: GameSettings,
    rng: &mut SessionRng,
    input: &mut R,
    ui: &mut TicTacToeGameUi<W>,
) -> Result<GameStatus, Box<dyn std::error::Error>> {
    let mut state = TicTacToeGameState::new(settings.first_side);

    if settings.show_welcome {
        ui.render_welcome()?;
    }
    ui.render_players_info()?;
    ui.render_board(&state.board)?;

    log!(
        "Game started, {:?} moves first, bot {:?}",
        settings.first_side,
        settings.bot
    );

    while !state.status.is_over() {
        let side = state.current_side;
        let index = match side {
            Side::Minimizer => read_human_move(input, ui, &state.board)?,
            Side::Maximizer => {
                ui.render_ai_turn()?;
                if settings.explain {
                    let scores = score_moves(&mut state.board);
                    ui.render_move_scores(&scores)?;
                    match settings.bot {
                        BotKind::Minimax => best_move(&scores)?,
                        BotKind::Random => calculate_move(settings.bot, &state.board, rng)?,
                    }
                } else {
                    calculate_move(settings.bot, &state.board, rng)?
                }
            }
        };

        state.place_mark(side, index)?;
        log!("{:?} played cell {}", side, index + 1);
        ui.render_after_move(side, &state.board)?;
    }

    log!("Game finished: {:?}", state.status);
    ui.render_outcome(&state.board)?;
    ui.render_board(&state.board)?;

    Ok(state.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(first_side: Side) -> GameSettings {
        GameSettings {
            first_side,
            bot: BotKind::Minimax,
            explain: false,
            show_welcome: false,
        }
    }

    fn play(settings: GameSettings, moves: &str) -> (GameStatus, String) {
        let mut rng = SessionRng::new(3);
        let mut input = Cursor::new(moves.to_string());
        let mut ui = TicTacToeGameUi::new(Vec::new());
        let status = run_tictactoe_game(settings, &mut rng, &mut input, &mut ui).unwrap();
        (status, String::from_utf8(ui.into_inner()).unwrap())
    }

    #[test]
    fn test_ai_punishes_weak_play() {
        // Human 1, AI 5, human 2, AI blocks 3 and threatens 7, human 9, AI completes 7.
        let (status, text) = play(settings(Side::Minimizer), "1\n2\n9\n");
        assert_eq!(status, GameStatus::Won(Side::Maximizer));
        assert!(text.contains("AI won!"));
        assert!(text.contains("Winning line: 3-5-7"));
    }

    #[test]
    fn test_solid_play_draws() {
        let (status, text) = play(settings(Side::Minimizer), "5\n9\n2\n0\n4\n6\n7\n");
        assert_eq!(status, GameStatus::Draw);
        assert!(text.contains("Draw!"));
        assert_eq!(text.matches("You cannot make that move. Try again.").count(), 2);
    }

    #[test]
    fn test_ai_can_open() {
        let (status, text) = play(
            GameSettings {
                explain: true,
                show_welcome: true,
                ..settings(Side::Maximizer)
            },
            "5\n3\n4\n8\n",
        );
        assert_eq!(status, GameStatus::Draw);
        assert!(text.contains("Welcome to tikito"));
        assert!(text.contains("Move values:"));
    }

    #[test]
    fn test_explained_moves_match_plain_play() {
        // Scores shown with explain feed the move directly, so the game must not change.
        let moves = "1\n2\n9\n";
        let (plain_status, _) = play(settings(Side::Minimizer), moves);
        let (explained_status, text) = play(
            GameSettings {
                explain: true,
                ..settings(Side::Minimizer)
            },
            moves,
        );
        assert_eq!(plain_status, explained_status);
        assert_eq!(text.matches("Move values:").count(), 3);
        assert!(text.contains("Winning line: 3-5-7"));
    }

    #[test]
    fn test_closed_input_aborts_game() {
        let mut rng = SessionRng::new(3);
        let mut input = Cursor::new("5\n".to_string());
        let mut ui = TicTacToeGameUi::new(Vec::new());
        assert!(run_tictactoe_game(settings(Side::Minimizer), &mut rng, &mut input, &mut ui).is_err());
    }
}
