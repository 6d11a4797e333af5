use crate::config::Settings;
use crate::upstream::deepl::DeeplClient;
use crate::upstream::github::ContentsClient;
use crate::upstream::shopify::ShopifyClient;

/// Shared application state injected into every handler.
///
/// One reqwest client is built at startup and cloned into each upstream
/// client, so concurrent invocations reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub deepl: DeeplClient,
    pub shopify: ShopifyClient,
    pub contents: ContentsClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let http = reqwest::Client::new();

        Self {
            deepl: DeeplClient::new(http.clone(), settings),
            shopify: ShopifyClient::new(http.clone(), settings),
            contents: ContentsClient::new(http, settings),
        }
    }
}
