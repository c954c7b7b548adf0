//! Status + body pair returned by every client call
//!
//! The service answers successes with JSON and most failures with an HTML or
//! plain-text page ("Forbidden", "Filter value is incorrect", ...). The body is
//! kept as JSON when it parses and as raw text otherwise, and the status is
//! never interpreted by the client.

use crate::core_types::pet::{ApiKey, Pet, PetList};
use crate::error::{PetFriendsError, PetFriendsResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response body, parsed when possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Parse as JSON, falling back to the raw text.
    pub fn from_text(raw: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// Substring match against the body as text. JSON bodies are searched in
    /// their serialized form.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            ResponseBody::Text(text) => text.contains(needle),
            ResponseBody::Json(value) => value.to_string().contains(needle),
        }
    }

    /// String field of a JSON object body.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.as_json()?.get(key)?.as_str()
    }
}

impl std::fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Status code and body of one request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }

    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.body.field_str(key)
    }

    /// Decode a JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ResponseParsingError`] when the body is text
    /// or doesn't match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> PetFriendsResult<T> {
        let value = self.body.as_json().ok_or_else(|| {
            PetFriendsError::response_parsing_error(format!(
                "Expected JSON body, got text (status {})",
                self.status
            ))
        })?;

        T::deserialize(value).map_err(|e| {
            PetFriendsError::response_parsing_error(format!("Unexpected body shape: {e}"))
        })
    }

    /// The `key` field of a successful authentication.
    pub fn api_key(&self) -> PetFriendsResult<ApiKey> {
        self.field_str("key").map(ApiKey::from).ok_or_else(|| {
            PetFriendsError::response_parsing_error(format!(
                "No key in authentication response (status {})",
                self.status
            ))
        })
    }

    pub fn pet(&self) -> PetFriendsResult<Pet> {
        self.json()
    }

    pub fn pet_list(&self) -> PetFriendsResult<PetList> {
        self.json()
    }
}
