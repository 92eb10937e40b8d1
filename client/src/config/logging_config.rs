use serde::{Deserialize, Serialize};
use tikito_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
