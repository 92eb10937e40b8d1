mod config;
mod game_config;
mod logging_config;

pub use config::{Config, get_config_manager};
pub use game_config::GameConfig;
pub use logging_config::LoggingConfig;
