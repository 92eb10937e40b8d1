use serde::{Deserialize, Serialize};
use tikito_common::config::Validate;
use tikito_common::games::tictactoe::{BotKind, FirstPlayerMode};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub bot: BotKind,
    /// Print the minimax value of every candidate cell before the AI moves.
    #[serde(default)]
    pub explain: bool,
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
}

fn default_show_welcome() -> bool {
    true
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.explain && self.bot != BotKind::Minimax {
            return Err("explain is only available with the minimax bot".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            bot: BotKind::Minimax,
            explain: false,
            show_welcome: default_show_welcome(),
        }
    }
}
