use anyhow::{Context, Result};
use std::env;

/// Process-wide configuration, read once at startup.
///
/// Handlers never touch the environment at request time - everything they
/// need is injected through this struct, so tests can run with fake
/// credentials and local upstream URLs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub deepl_api_key: String,
    pub deepl_api_url: String,
    pub shopify_store: String,
    pub shopify_token: String,
    pub shopify_api_url: String,
    pub github_token: String,
    pub github_owner: String,
    pub github_repo: String,
    pub github_api_url: String,
    pub translations_file_path: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let shopify_store =
            env::var("SHOPIFY_STORE").context("SHOPIFY_STORE must be set")?;
        let shopify_api_url = env::var("SHOPIFY_API_URL")
            .unwrap_or_else(|_| format!("https://{}", shopify_store));

        Ok(Self {
            deepl_api_key: env::var("DEEPL_API_KEY")
                .context("DEEPL_API_KEY must be set")?,
            deepl_api_url: env_or("DEEPL_API_URL", "https://api-free.deepl.com"),
            shopify_store,
            shopify_token: env::var("SHOPIFY_TOKEN")
                .context("SHOPIFY_TOKEN must be set")?,
            shopify_api_url,
            github_token: env::var("GITHUB_TOKEN")
                .context("GITHUB_TOKEN must be set")?,
            github_owner: env::var("GITHUB_OWNER")
                .context("GITHUB_OWNER must be set")?,
            github_repo: env::var("GITHUB_REPO")
                .context("GITHUB_REPO must be set")?,
            github_api_url: env_or("GITHUB_API_URL", "https://api.github.com"),
            translations_file_path: env_or("TRANSLATIONS_FILE_PATH", "translations.json"),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
