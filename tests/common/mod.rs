use storefront_proxy::Settings;

/// Settings pointing every upstream at a port nothing listens on, for
/// tests that must fail before any outbound call is attempted.
#[allow(dead_code)]
pub fn offline_settings() -> Settings {
    settings_with("http://127.0.0.1:1", "http://127.0.0.1:1", "http://127.0.0.1:1")
}

pub fn settings_with(deepl_url: &str, shopify_url: &str, github_url: &str) -> Settings {
    Settings {
        deepl_api_key: "test-deepl-key".to_string(),
        deepl_api_url: deepl_url.to_string(),
        shopify_store: "test-store.myshopify.com".to_string(),
        shopify_token: "test-shopify-token".to_string(),
        shopify_api_url: shopify_url.to_string(),
        github_token: "test-github-token".to_string(),
        github_owner: "acme".to_string(),
        github_repo: "storefront".to_string(),
        github_api_url: github_url.to_string(),
        translations_file_path: "translations.json".to_string(),
    }
}
