//! Poller - main worker loop

use crate::api::StatusClient;
use crate::error::{BotError, Result};
use crate::status::{check_response, parse_status, poll_window};
use crate::telegram::TelegramBot;
use crate::worker::WorkerConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Per-iteration state carried across polls.
///
/// No persistence: a restart re-reports the latest status once.
#[derive(Debug, Default)]
pub struct LoopState {
    timestamp: i64,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl LoopState {
    pub fn starting_at(timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    /// True when `message` matches the last successfully sent status message
    pub fn is_repeat_message(&self, message: &str) -> bool {
        self.last_message.as_deref() == Some(message)
    }

    /// Remember a status message after it was delivered
    pub fn record_message(&mut self, message: String) {
        self.last_message = Some(message);
    }

    /// True when `message` matches the last successfully sent error report
    pub fn is_repeat_error(&self, message: &str) -> bool {
        self.last_error.as_deref() == Some(message)
    }

    /// Remember an error report after it was delivered
    pub fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }
}

/// Polling loop driver: fetch, validate, format, notify, deduplicate
pub struct Poller {
    api: StatusClient,
    bot: TelegramBot,
    config: WorkerConfig,
    state: LoopState,
    shutdown: Arc<AtomicBool>,
}

impl Poller {
    /// Create a new poller whose window starts at the current time
    pub fn new(api: StatusClient, bot: TelegramBot, config: WorkerConfig) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            api,
            bot,
            config,
            state: LoopState::starting_at(now),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a handle to signal shutdown
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Main worker loop
    ///
    /// Polls and notifies until shutdown is signaled. Every iteration
    /// failure is reported to the chat, deduplicated against the last
    /// error sent; the loop itself never dies on one.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting homework status watcher...");
        info!("Poll interval: {:?}", self.config.poll_interval);

        loop {
            // Check for shutdown signal
            if self.shutdown.load(Ordering::Relaxed) {
                info!("Shutdown signal received, stopping watcher...");
                break;
            }

            match self.run_once().await {
                Ok(Some(message)) => {
                    info!("Notification sent: {}", message);
                }
                Ok(None) => {
                    debug!("No status change");
                }
                Err(e) => {
                    error!("Iteration failed: {}", e);
                    self.report_failure(&e).await;
                }
            }

            sleep(self.config.poll_interval).await;
        }

        info!("Watcher stopped");
        Ok(())
    }

    /// Run one full iteration: poll, send on change.
    ///
    /// Returns:
    /// - Ok(Some(message)) if a status change was sent
    /// - Ok(None) if the status matches the last sent message
    /// - Err on any fetch, validation, or delivery failure
    pub async fn run_once(&mut self) -> Result<Option<String>> {
        match self.poll_once().await? {
            Some(message) => {
                self.bot.send_message(&message).await?;
                self.state.record_message(message.clone());
                Ok(Some(message))
            }
            None => Ok(None),
        }
    }

    /// One fetch -> validate -> format pass, no side effects on the chat.
    ///
    /// Returns the notification text for the first homework in the poll
    /// window, or None when it repeats the previously sent message.
    /// Advances the window to the payload's `current_date` on success.
    pub async fn poll_once(&mut self) -> Result<Option<String>> {
        let payload = self.api.get_api_answer(self.state.timestamp).await?;
        let homeworks = check_response(&payload)?;
        let message = parse_status(&homeworks[0])?;

        if let Some(current) = poll_window(&payload) {
            debug!("Advancing poll window to {}", current);
            self.state.timestamp = current;
        }

        if self.state.is_repeat_message(&message) {
            Ok(None)
        } else {
            Ok(Some(message))
        }
    }

    /// Report an iteration failure to the chat, once per distinct error.
    ///
    /// A failure to deliver the report is logged and swallowed; the loop
    /// must keep running.
    async fn report_failure(&mut self, error: &BotError) {
        let message = format!("Сбой в работе программы: {}", error);
        if self.state.is_repeat_error(&message) {
            debug!("Suppressing repeated error notification");
            return;
        }

        match self.bot.send_message(&message).await {
            Ok(()) => self.state.record_error(message),
            Err(e) => error!("Failed to deliver error notification: {}", e),
        }
    }
}

/// Setup signal handlers for graceful shutdown
pub fn setup_signal_handler(shutdown: Arc<AtomicBool>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, initiating shutdown...");
                shutdown.store(true, Ordering::Relaxed);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_never_reports_repeats() {
        let state = LoopState::starting_at(1_700_000_000);
        assert!(!state.is_repeat_message("anything"));
        assert!(!state.is_repeat_error("anything"));
    }

    #[test]
    fn identical_status_message_is_a_repeat() {
        let mut state = LoopState::default();
        state.record_message("approved".to_string());

        assert!(state.is_repeat_message("approved"));
        assert!(!state.is_repeat_message("rejected"));
    }

    #[test]
    fn message_and_error_dedup_are_independent() {
        let mut state = LoopState::default();
        state.record_message("same text".to_string());

        assert!(!state.is_repeat_error("same text"));
        state.record_error("same text".to_string());
        assert!(state.is_repeat_error("same text"));
        assert!(state.is_repeat_message("same text"));
    }

    #[test]
    fn newer_error_replaces_the_last_one() {
        let mut state = LoopState::default();
        state.record_error("first".to_string());
        state.record_error("second".to_string());

        assert!(!state.is_repeat_error("first"));
        assert!(state.is_repeat_error("second"));
    }
}
