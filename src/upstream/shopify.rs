use reqwest::Client;
use serde_json::{json, Value};

use crate::api::error::ApiResult;
use crate::config::Settings;

/// Admin API version every request is pinned to.
pub const ADMIN_API_VERSION: &str = "2026-01";

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Shopify Admin API. Exists to keep the access token
/// server-side and dodge CORS for the storefront admin UI.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: Client,
    token: String,
    base_url: String,
}

impl ShopifyClient {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            token: settings.shopify_token.clone(),
            base_url: settings.shopify_api_url.clone(),
        }
    }

    /// POST the query to the GraphQL endpoint and hand back whatever JSON
    /// comes out. GraphQL-level errors ride along in the body; they are
    /// never turned into HTTP failures here.
    pub async fn graphql(&self, query: Option<&str>, variables: Value) -> ApiResult<Value> {
        let resp = self
            .http
            .post(format!(
                "{}/admin/api/{}/graphql.json",
                self.base_url, ADMIN_API_VERSION
            ))
            .header(ACCESS_TOKEN_HEADER, self.token.as_str())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        Ok(resp.json().await?)
    }

    /// GET a REST resource. The endpoint is a caller-supplied path segment,
    /// forwarded unmodified.
    // TODO: allow-list Admin resources here once the admin UI's usage settles
    pub async fn rest(&self, endpoint: &str) -> ApiResult<Value> {
        let resp = self
            .http
            .get(format!(
                "{}/admin/api/{}/{}",
                self.base_url, ADMIN_API_VERSION, endpoint
            ))
            .header(ACCESS_TOKEN_HEADER, self.token.as_str())
            .send()
            .await?;

        Ok(resp.json().await?)
    }
}
