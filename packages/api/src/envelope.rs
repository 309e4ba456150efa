//! Decoding for the two response shapes the API uses.
//!
//! List endpoints answer either with a bare JSON array (`get-users`) or with
//! an envelope `{success, data, error?}` (`get-access-requests`,
//! `get-assignments`, `get-computers`). Both are decoded once, here, into a
//! plain `Result<Vec<T>, ApiError>` so nothing downstream ever sees the
//! shape difference. A `success: false` or a present `error` is a failure —
//! there is no silent partial success.

use serde::Deserialize;

use crate::error::ApiError;

/// The `{success, data, error}` wrapper used by the newer endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope of a single-record endpoint.
    pub fn into_result(self) -> Result<T, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Envelope(error));
        }
        if !self.success {
            return Err(ApiError::Envelope("La API informó un fallo.".to_string()));
        }
        self.data
            .ok_or_else(|| ApiError::Envelope("La API no devolvió datos.".to_string()))
    }
}

/// A list response in either of the API's two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Wrapped(Envelope<Vec<T>>),
}

impl<T> ListResponse<T> {
    pub fn into_result(self) -> Result<Vec<T>, ApiError> {
        match self {
            ListResponse::Plain(items) => Ok(items),
            ListResponse::Wrapped(envelope) => envelope.into_result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn bare_array_decodes() {
        let parsed: ListResponse<Item> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        let items = parsed.into_result().unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn successful_envelope_decodes() {
        let parsed: ListResponse<Item> =
            serde_json::from_str(r#"{"success": true, "data": [{"id": 7}]}"#).unwrap();
        assert_eq!(parsed.into_result().unwrap(), vec![Item { id: 7 }]);
    }

    #[test]
    fn failed_envelope_is_an_error_even_with_data() {
        let parsed: ListResponse<Item> =
            serde_json::from_str(r#"{"success": false, "data": [{"id": 7}]}"#).unwrap();
        let err = parsed.into_result().unwrap_err();
        assert_eq!(err.user_message(), "La API informó un fallo.");
    }

    #[test]
    fn envelope_error_message_wins() {
        let parsed: ListResponse<Item> =
            serde_json::from_str(r#"{"success": true, "data": [], "error": "tabla no disponible"}"#)
                .unwrap();
        let err = parsed.into_result().unwrap_err();
        assert_eq!(err.user_message(), "tabla no disponible");
    }

    #[test]
    fn single_record_envelope_requires_data() {
        let parsed: Envelope<Item> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = parsed.into_result().unwrap_err();
        assert_eq!(err.user_message(), "La API no devolvió datos.");

        let parsed: Envelope<Item> =
            serde_json::from_str(r#"{"success": true, "data": {"id": 3}}"#).unwrap();
        assert_eq!(parsed.into_result().unwrap(), Item { id: 3 });
    }
}
