//! Credential loading from the environment

use crate::error::{BotError, Result};

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Credentials required before the loop may start.
///
/// A constructed `Config` means all three are present and non-empty;
/// there is no partially-valid state to check later.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-status API
    pub practicum_token: String,
    /// Bot token for the Telegram API
    pub telegram_token: String,
    /// Destination chat
    pub chat_id: String,
}

impl Config {
    /// Load credentials from the environment (`.env` honored if present).
    ///
    /// Fails with a single error naming every missing or empty variable.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_source(|name| std::env::var(name).ok())
    }

    fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| get(name).filter(|value| !value.trim().is_empty());

        let practicum_token = read(PRACTICUM_TOKEN_VAR);
        let telegram_token = read(TELEGRAM_TOKEN_VAR);
        let chat_id = read(TELEGRAM_CHAT_ID_VAR);

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push(PRACTICUM_TOKEN_VAR);
        }
        if telegram_token.is_none() {
            missing.push(TELEGRAM_TOKEN_VAR);
        }
        if chat_id.is_none() {
            missing.push(TELEGRAM_CHAT_ID_VAR);
        }

        match (practicum_token, telegram_token, chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(chat_id)) => Ok(Self {
                practicum_token,
                telegram_token,
                chat_id,
            }),
            _ => Err(BotError::MissingEnv(missing.join(", "))),
        }
    }
}
