mod config;
mod game_ui;
mod offline;

use std::io;

use clap::{Parser, ValueEnum};
use tikito_common::config::{ConfigError, Validate};
use tikito_common::games::SessionRng;
use tikito_common::games::tictactoe::{BotKind, FirstPlayerMode};
use tikito_common::{log, logger};

use config::{Config, GameConfig, get_config_manager};
use game_ui::TicTacToeGameUi;
use offline::{GameSettings, run_tictactoe_game};

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Ai,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Ai => FirstPlayerMode::Ai,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotKind {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Minimax => BotKind::Minimax,
            BotArg::Random => BotKind::Random,
        }
    }
}

/// Tic-Tac-Toe against an AI that never loses
#[derive(Parser)]
#[command(name = "tikito", version, about)]
struct Args {
    /// Who places the first mark
    #[arg(long, value_enum)]
    first: Option<FirstArg>,
    /// Strategy used by the AI
    #[arg(long, value_enum)]
    bot: Option<BotArg>,
    /// Seed for the random first player and the random bot
    #[arg(long)]
    seed: Option<u64>,
    /// Show the minimax value of each cell before the AI moves
    #[arg(long)]
    explain: bool,
    /// Skip the welcome banner
    #[arg(long)]
    quiet: bool,
    /// Config file path (defaults to tikito_config.yaml next to the executable)
    #[arg(long)]
    config: Option<String>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
    /// Log game events to stderr
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    /// Flags override the stored config; the merged result must still validate.
    fn apply_to(&self, config: &Config) -> Result<Config, ConfigError> {
        let mut config = config.clone();
        let game = &mut config.game;
        if let Some(first) = self.first {
            game.first_player = first.into();
        }
        if let Some(bot) = self.bot {
            game.bot = bot.into();
        }
        game.explain |= self.explain;
        game.show_welcome &= !self.quiet;
        config.logging.verbose |= self.verbose;
        if self.use_log_prefix && config.logging.prefix.is_none() {
            config.logging.prefix = Some("tikito".to_string());
        }
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

fn game_settings(game: &GameConfig, rng: &mut SessionRng) -> GameSettings {
    GameSettings {
        first_side: rng.first_side(game.first_player),
        bot: game.bot,
        explain: game.explain,
        show_welcome: game.show_welcome,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.apply_to(&config_manager.get_config()?)?;

    logger::init_logger(config.logging.prefix.clone(), config.logging.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Settings saved");
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let settings = game_settings(&config.game, &mut rng);
    let mut ui = TicTacToeGameUi::new(io::stdout().lock());
    let mut input = io::stdin().lock();

    run_tictactoe_game(settings, &mut rng, &mut input, &mut ui)?;

    Ok(())
}
