//! Homework Notifier - polls a homework-review API and forwards status
//! changes to Telegram
//!
//! The service requests review statuses changed since the last poll window,
//! validates the payload shape, formats the newest status as a human-readable
//! verdict, and sends it to a fixed chat. Repeated statuses and repeated
//! errors are reported once.

pub mod api;
pub mod config;
pub mod error;
pub mod status;
pub mod telegram;
pub mod worker;

pub use api::{ClientConfig, StatusClient, ENDPOINT};
pub use config::Config;
pub use error::{BotError, Result};
pub use status::{check_response, parse_status, poll_window, HomeworkRecord, HomeworkStatus};
pub use telegram::TelegramBot;
pub use worker::{Poller, WorkerConfig};
