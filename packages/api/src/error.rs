//! Error taxonomy for calls against the personnel-management API.
//!
//! Four classes, mirroring how failures surface to the user:
//!
//! - [`ApiError::Transport`] — no response was received at all.
//! - [`ApiError::Unauthorized`] — a 401; the single session-expiry signal,
//!   handled centrally by the UI rather than per call site.
//! - [`ApiError::Api`] — a non-2xx response with a body; the message is
//!   extracted from the body's `error` field, then `message`, then the
//!   HTTP status as a last resort.
//! - [`ApiError::Envelope`] — a 2xx whose `{success, data, error}` envelope
//!   reported failure.
//!
//! Validation failures never become an `ApiError`: they are caught before a
//! request is made (see [`crate::forms`]).

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sesión expirada o no autorizado")]
    Unauthorized,

    #[error("la API respondió {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Envelope(String),
}

impl ApiError {
    /// The inline text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Error de red o al procesar la solicitud. Por favor, inténtelo de nuevo.".to_string()
            }
            ApiError::Unauthorized => "Sesión expirada o no autorizado.".to_string(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Envelope(message) => message.clone(),
        }
    }
}

/// Shape of an error response body. The API is inconsistent about which
/// field carries the text, so both are accepted; `error` wins.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Extract a user-facing message from a non-2xx response body.
pub(crate) fn message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| format!("Error HTTP {status}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_preferred_over_message() {
        let body = r#"{"error": "usuario duplicado", "message": "otro texto"}"#;
        assert_eq!(message_from_body(400, body), "usuario duplicado");
    }

    #[test]
    fn message_field_is_the_fallback() {
        let body = r#"{"message": "faltan campos"}"#;
        assert_eq!(message_from_body(400, body), "faltan campos");
    }

    #[test]
    fn unparseable_body_falls_back_to_the_status() {
        assert_eq!(message_from_body(502, "<html>bad gateway</html>"), "Error HTTP 502.");
        assert_eq!(message_from_body(500, ""), "Error HTTP 500.");
    }

    #[test]
    fn null_fields_fall_back_to_the_status() {
        let body = r#"{"error": null, "message": null}"#;
        assert_eq!(message_from_body(404, body), "Error HTTP 404.");
    }
}
