//! Telegram Bot API client for outbound notifications

use crate::error::{BotError, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending messages to a fixed chat via the Telegram Bot API
pub struct TelegramBot {
    client: Client,
    token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramBot {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            client: Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    /// Send a text message to the configured chat.
    ///
    /// Delivery failures are logged here and surfaced as [`BotError::Send`].
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let outcome = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match outcome {
            Ok(_) => {
                debug!("Telegram message delivered");
                Ok(())
            }
            Err(e) => {
                error!("Telegram delivery failed: {}", e);
                Err(BotError::Send(e))
            }
        }
    }
}
