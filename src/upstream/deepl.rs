use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::config::Settings;
use crate::models::deepl::TranslateRequest;

/// Client for the DeepL v2 API. The key never leaves this process;
/// browsers only ever talk to the proxy.
#[derive(Debug, Clone)]
pub struct DeeplClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl DeeplClient {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            api_key: settings.deepl_api_key.clone(),
            base_url: settings.deepl_api_url.clone(),
        }
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }

    /// GET /v2/usage - returned verbatim to the caller.
    pub async fn usage(&self) -> ApiResult<Value> {
        let resp = self
            .http
            .get(format!("{}/v2/usage", self.base_url))
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        Ok(resp.json().await?)
    }

    /// POST /v2/translate with a form-encoded body. A non-success upstream
    /// status is relayed as-is, with the provider's error text wrapped in
    /// JSON so the caller can tell it apart from proxy failures.
    pub async fn translate(&self, request: &TranslateRequest) -> ApiResult<Value> {
        let resp = self
            .http
            .post(format!("{}/v2/translate", self.base_url))
            .header(AUTHORIZATION, self.auth_header())
            .form(&request.form_params())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Upstream { status, body });
        }

        Ok(resp.json().await?)
    }
}
