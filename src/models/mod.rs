pub mod deepl;
pub mod shopify;
pub mod translations;

pub use deepl::TranslateRequest;
pub use shopify::CommerceRequest;
pub use translations::{SaveResult, TranslationsDocument, TranslationsRequest};
