use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::api::utils::parse_json_body;
use crate::models::shopify::CommerceRequest;

/// POST /api/shopify
/// Forwards GraphQL or REST requests to the Admin API. Responses come back
/// with status 200 whatever the upstream said; GraphQL error objects are
/// the caller's to inspect.
#[tracing::instrument(skip(state, body), fields(endpoint = "shopify"))]
pub async fn shopify_proxy_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request: CommerceRequest = parse_json_body(&body)?;

    let result = match request.request_type.as_deref() {
        Some("graphql") => {
            info!("Forwarding Admin GraphQL request");
            let variables = request
                .variables
                .unwrap_or_else(|| Value::Object(Map::new()));
            state
                .shopify
                .graphql(request.query.as_deref(), variables)
                .await?
        }
        Some("rest") => {
            let endpoint = request.endpoint.unwrap_or_default();
            info!(endpoint = %endpoint, "Forwarding Admin REST request");
            state.shopify.rest(&endpoint).await?
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Invalid type - use \"graphql\" or \"rest\"".to_string(),
            ));
        }
    };

    Ok(Json(result))
}
