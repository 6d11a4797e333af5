use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{SecondsFormat, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::config::Settings;

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Client for the GitHub contents API, scoped to the single translations
/// file. The repo is the store of record; every save is a commit.
#[derive(Debug, Clone)]
pub struct ContentsClient {
    http: Client,
    token: String,
    base_url: String,
    owner: String,
    repo: String,
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct ContentsFile {
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct WritePayload<'a> {
    message: String,
    content: String,
    // sha is required to update an existing file; omitted on first create
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    content: WrittenFile,
}

#[derive(Debug, Deserialize)]
struct WrittenFile {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ContentsClient {
    pub fn new(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            token: settings.github_token.clone(),
            base_url: settings.github_api_url.clone(),
            owner: settings.github_owner.clone(),
            repo: settings.github_repo.clone(),
            file_path: settings.translations_file_path.clone(),
        }
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, self.owner, self.repo, self.file_path
        )
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(API_VERSION_HEADER, API_VERSION)
    }

    /// Read the current document. `None` means the file does not exist yet,
    /// which callers treat as an empty document rather than an error.
    pub async fn fetch(&self) -> ApiResult<Option<(Value, String)>> {
        let resp = self
            .with_headers(self.http.get(self.contents_url()))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Internal(format!(
                "GitHub API error: {}",
                status.as_u16()
            )));
        }

        let file: ContentsFile = resp.json().await?;
        let decoded = decode_content(&file.content)?;
        let translations: Value = serde_json::from_slice(&decoded)?;

        Ok(Some((translations, file.sha)))
    }

    /// Commit a new revision of the document. The caller's `sha` is passed
    /// through untouched; a stale one is GitHub's to reject, not ours.
    /// Returns the new content sha for the next save.
    pub async fn write(&self, translations: &Value, sha: Option<&str>) -> ApiResult<String> {
        let pretty = serde_json::to_string_pretty(translations)?;

        let payload = WritePayload {
            message: format!(
                "Update translations - {}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            content: STANDARD.encode(pretty.as_bytes()),
            sha,
        };

        let resp = self
            .with_headers(self.http.put(self.contents_url()))
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("GitHub API error: {}", status.as_u16()));
            return Err(ApiError::Internal(message));
        }

        let written: WriteResponse = resp.json().await?;
        Ok(written.content.sha)
    }
}

/// GitHub wraps base64 payloads at 60 columns; drop the embedded newlines
/// before decoding.
fn decode_content(content: &str) -> ApiResult<Vec<u8>> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact)
        .map_err(|e| ApiError::Internal(format!("Invalid base64 content: {}", e)))
}
