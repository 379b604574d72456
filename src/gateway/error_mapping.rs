//! Error mapping helpers for the reqwest gateway.

use reqwest::StatusCode;

use crate::error::InteractionError;

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> InteractionError {
    InteractionError::Transport {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_status_error(status: StatusCode, body: &str) -> InteractionError {
    InteractionError::Status {
        status: status.as_u16(),
        message: extract_server_message(body),
    }
}

pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> InteractionError {
    InteractionError::Decode {
        message: format!("{operation} response is not valid JSON: {error}"),
    }
}

/// Extracts the `message` field of a JSON error body.
pub(super) fn extract_server_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(ToOwned::to_owned)
}
