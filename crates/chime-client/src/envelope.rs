//! The `{ success, message, data }` wrapper every backend response uses.

use chime_normalize::{coerce_bool, FlagValue};
use chime_shared::constants::DEFAULT_API_FAILURE_MESSAGE;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Absent means success; the backend is not consistent about its type.
    #[serde(default)]
    pub success: FlagValue,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a failed or empty response into an error.
    pub fn into_data(self) -> Result<T> {
        if !coerce_bool(&self.success, true) {
            return Err(ClientError::Api {
                message: self
                    .message
                    .unwrap_or_else(|| DEFAULT_API_FAILURE_MESSAGE.to_string()),
            });
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

/// Decode a response body and unwrap its payload.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    envelope.into_data()
}
