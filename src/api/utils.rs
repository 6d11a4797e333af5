/// Shared utility functions for API handlers
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiResult};

/// Parse a raw request body as JSON, before any outbound call is attempted.
/// All three endpoints report an unparsable body the same way.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest("Invalid JSON".to_string()))
}
