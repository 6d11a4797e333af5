use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::utils::parse_json_body;
use crate::models::deepl::TranslateRequest;

/// POST /api/deepl
/// Forwards text payloads to DeepL, keeping the API key server-side.
/// `action: "usage"` skips translation and returns the account's usage.
#[tracing::instrument(skip(state, body), fields(endpoint = "deepl"))]
pub async fn deepl_proxy_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request: TranslateRequest = parse_json_body(&body)?;

    // Usage endpoint - bypasses all translation-field validation
    if request.is_usage_check() {
        info!("Checking DeepL usage");
        let usage = state.deepl.usage().await?;
        return Ok(Json(usage));
    }

    if request.texts.is_empty() || request.target_lang.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing texts or target_lang".to_string(),
        ));
    }

    info!(
        text_count = request.texts.len(),
        target_lang = %request.target_lang,
        "Forwarding translation request"
    );

    let translated = state.deepl.translate(&request).await?;
    Ok(Json(translated))
}
