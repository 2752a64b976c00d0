//! Error types for homework-notifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Missing required environment variables: {0}")]
    MissingEnv(String),

    #[error("Failed to reach {endpoint}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Endpoint {endpoint} answered with HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Failed to decode the API response as JSON")]
    Json(#[source] reqwest::Error),

    #[error("API response is not a JSON object")]
    PayloadNotObject,

    #[error("API response has no \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" is not a list")]
    HomeworksNotList,

    #[error("Homework list is empty")]
    EmptyHomeworks,

    #[error("Homework record is missing the \"{0}\" field")]
    MissingField(&'static str),

    #[error("Unknown review status \"{status}\" for homework \"{name}\"")]
    UnknownStatus { name: String, status: String },

    #[error("Failed to send Telegram message")]
    Send(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
