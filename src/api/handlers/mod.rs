// Proxy handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Parse and validate the JSON body
// 2. Make exactly one call through an upstream client
// 3. Transform the upstream result to an HTTP response

pub mod deepl;
pub mod shopify;
pub mod translations;

pub use deepl::deepl_proxy_handler;
pub use shopify::shopify_proxy_handler;
pub use translations::translations_handler;
