//! Response envelope shared by every farm API endpoint
//!
//! `{"success": bool, "error": "...", "message": "...", "<key>": payload}`

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{FarmError, FarmResult};

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Envelope {
    /// Parse a response body, turning a failed envelope into a gateway error
    ///
    /// `status_ok` is whether the HTTP status was 2xx; a body that is not an
    /// envelope at all falls back to `fallback` as the message.
    pub fn parse(body: &str, status_ok: bool, fallback: impl FnOnce() -> String) -> FarmResult<Self> {
        let envelope: Envelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(_) => return Err(FarmError::Gateway(fallback())),
        };

        if !status_ok || !envelope.success {
            return Err(FarmError::Gateway(
                envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(fallback),
            ));
        }

        Ok(envelope)
    }

    /// Take a required payload field
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> FarmResult<T> {
        match self.payload.remove(key) {
            Some(Value::Null) | None => Err(FarmError::gateway(format!(
                "Malformed response: missing '{}'",
                key
            ))),
            Some(value) => decode(key, value),
        }
    }

    /// Take an optional payload field; `null` and absence both yield `None`
    pub fn take_optional<T: DeserializeOwned>(&mut self, key: &str) -> FarmResult<Option<T>> {
        match self.payload.remove(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => decode(key, value).map(Some),
        }
    }

    /// Take a list payload; a missing list is treated as empty
    pub fn take_list<T: DeserializeOwned>(&mut self, key: &str) -> FarmResult<Vec<T>> {
        Ok(self.take_optional(key)?.unwrap_or_default())
    }
}

/// A payload that does not match our records is a gateway failure, not a
/// local JSON error
fn decode<T: DeserializeOwned>(key: &str, value: Value) -> FarmResult<T> {
    serde_json::from_value(value)
        .map_err(|e| FarmError::gateway(format!("Malformed response: '{}': {}", key, e)))
}
