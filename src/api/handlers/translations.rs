use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::utils::parse_json_body;
use crate::models::translations::{SaveResult, TranslationsDocument, TranslationsRequest};

/// POST /api/translations
/// Reads and writes the translations document stored in the content repo.
/// Translations persist independently of CMS deploys.
#[tracing::instrument(skip(state, body), fields(endpoint = "translations"))]
pub async fn translations_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Response> {
    let request: TranslationsRequest = parse_json_body(&body)?;

    match request.action.as_deref() {
        Some("get") => {
            info!("Fetching translations document");
            let document = match state.contents.fetch().await? {
                Some((translations, sha)) => TranslationsDocument {
                    translations,
                    sha: Some(sha),
                },
                // File doesn't exist yet - empty document, not an error
                None => TranslationsDocument::empty(),
            };
            Ok(Json(document).into_response())
        }
        Some("save") => {
            let translations = request.translations.ok_or_else(|| {
                ApiError::BadRequest("Missing translations".to_string())
            })?;

            info!(has_sha = request.sha.is_some(), "Saving translations document");
            let sha = state
                .contents
                .write(&translations, request.sha.as_deref())
                .await?;

            Ok(Json(SaveResult { ok: true, sha }).into_response())
        }
        _ => Err(ApiError::BadRequest(
            "Invalid action - use \"get\" or \"save\"".to_string(),
        )),
    }
}
