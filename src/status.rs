//! Payload validation and verdict formatting

use crate::error::{BotError, Result};
use serde_json::Value;
use std::str::FromStr;

/// Review outcome of a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Status code as it appears in the API payload
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence shown to the user
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

/// One homework entry from the status API.
///
/// The raw record may carry extra fields (reviewer comments, dates);
/// only the name and status matter here.
#[derive(Debug, Clone)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn from_value(value: &Value) -> Result<Self> {
        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(BotError::MissingField("homework_name"))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(BotError::MissingField("status"))?;
        let status = status.parse().map_err(|_| BotError::UnknownStatus {
            name: name.to_string(),
            status: status.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

/// Validate the poll payload and return the homework list.
///
/// The payload must be an object with a `homeworks` key holding a
/// non-empty list; each shape violation gets its own error.
pub fn check_response(payload: &Value) -> Result<&[Value]> {
    let object = payload.as_object().ok_or(BotError::PayloadNotObject)?;
    let homeworks = object.get("homeworks").ok_or(BotError::MissingHomeworks)?;
    let list = homeworks.as_array().ok_or(BotError::HomeworksNotList)?;
    if list.is_empty() {
        return Err(BotError::EmptyHomeworks);
    }

    Ok(list)
}

/// `current_date` from the payload, when the API includes one
pub fn poll_window(payload: &Value) -> Option<i64> {
    payload.get("current_date").and_then(Value::as_i64)
}

/// Format the notification text for one homework record
pub fn parse_status(record: &Value) -> Result<String> {
    let homework = HomeworkRecord::from_value(record)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        homework.status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, status: &str) -> Value {
        json!({ "homework_name": name, "status": status })
    }

    #[test]
    fn parse_status_approved() {
        let message = parse_status(&record("hw.zip", "approved")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw.zip\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn parse_status_reviewing() {
        let message = parse_status(&record("hw.zip", "reviewing")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw.zip\". \
             Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn parse_status_rejected() {
        let message = parse_status(&record("hw.zip", "rejected")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw.zip\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn parse_status_rejects_unknown_status() {
        let error = parse_status(&record("hw.zip", "burned")).unwrap_err();
        assert!(matches!(
            error,
            BotError::UnknownStatus { ref name, ref status }
                if name == "hw.zip" && status == "burned"
        ));
    }

    #[test]
    fn parse_status_requires_name_and_status() {
        let error = parse_status(&json!({ "status": "approved" })).unwrap_err();
        assert!(matches!(error, BotError::MissingField("homework_name")));

        let error = parse_status(&json!({ "homework_name": "hw.zip" })).unwrap_err();
        assert!(matches!(error, BotError::MissingField("status")));
    }

    #[test]
    fn check_response_rejects_non_object() {
        let error = check_response(&json!(["homeworks"])).unwrap_err();
        assert!(matches!(error, BotError::PayloadNotObject));
    }

    #[test]
    fn check_response_requires_homeworks_key() {
        let error = check_response(&json!({ "current_date": 0 })).unwrap_err();
        assert!(matches!(error, BotError::MissingHomeworks));
    }

    #[test]
    fn check_response_rejects_non_list() {
        let error = check_response(&json!({ "homeworks": "nope" })).unwrap_err();
        assert!(matches!(error, BotError::HomeworksNotList));
    }

    #[test]
    fn check_response_rejects_empty_list() {
        let error = check_response(&json!({ "homeworks": [] })).unwrap_err();
        assert!(matches!(error, BotError::EmptyHomeworks));
    }

    #[test]
    fn check_response_returns_records() {
        let payload = json!({ "homeworks": [record("hw.zip", "approved")] });
        let homeworks = check_response(&payload).unwrap();
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn poll_window_reads_current_date() {
        let payload = json!({ "homeworks": [], "current_date": 1_700_000_000 });
        assert_eq!(poll_window(&payload), Some(1_700_000_000));
        assert_eq!(poll_window(&json!({ "homeworks": [] })), None);
    }

    #[test]
    fn status_code_round_trip() {
        for status in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse(), Ok(status));
        }
        assert!("pending".parse::<HomeworkStatus>().is_err());
    }
}
