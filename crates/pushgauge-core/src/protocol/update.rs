//! Push-update payload (JSON).

use serde::Deserialize;

use crate::error::{PushGaugeError, Result};

/// One decoded push call. Lives only for the duration of a dispatch.
///
/// Decoding is lenient the way a streaming JSON decoder is: unknown fields
/// are ignored, a missing `value` is `0`, and anything after the first JSON
/// value is not read. A missing `name` or a non-numeric `value` is malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateRequest {
    /// Target instrument name.
    pub name: String,
    /// New value.
    #[serde(default)]
    pub value: f64,
}

impl UpdateRequest {
    /// Decode the first JSON value of a request body. Any JSON or shape
    /// error is a `BadRequest`.
    pub fn decode(body: &[u8]) -> Result<Self> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
            .ok_or_else(|| PushGaugeError::BadRequest("empty update body".into()))?
            .map_err(|e| PushGaugeError::BadRequest(format!("invalid update json: {e}")))
    }
}
