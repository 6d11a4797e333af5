// Upstream clients - all outbound HTTP lives here.
// Handlers stay thin: they validate input, make exactly one call through
// one of these clients, and map the result to a response.

pub mod deepl;
pub mod github;
pub mod shopify;

pub use deepl::DeeplClient;
pub use github::ContentsClient;
pub use shopify::ShopifyClient;
