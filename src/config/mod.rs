mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::{debug, warn};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("No configuration file at {}, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: Config = serde_yaml::from_str(&config_str)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.llm.provider != "gemini" {
        return Err(Error::config(format!(
            "Unsupported llm.provider '{}', only 'gemini' is available",
            config.llm.provider
        )));
    }
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }
    if config.llm.api_key_env.trim().is_empty() {
        return Err(Error::config("llm.api_key_env must not be empty"));
    }
    Ok(())
}

/// Reads the default credential from the environment variable named in `llm.api_key_env`.
/// Returns an empty string when the variable is unset.
pub fn default_credential(config: &LlmConfig) -> String {
    env::var(&config.api_key_env).unwrap_or_default()
}
