use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound payload for the translations store. `action` is `get` or `save`;
/// `translations` and `sha` only apply to `save`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationsRequest {
    pub action: Option<String>,
    pub translations: Option<Value>,
    pub sha: Option<String>,
}

/// The stored document plus its content hash. The `sha` is the optimistic
/// concurrency token: callers pass it back on the next save, and the store
/// rejects the write when it no longer matches. Absent when the file does
/// not exist yet.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationsDocument {
    pub translations: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl TranslationsDocument {
    pub fn empty() -> Self {
        Self {
            translations: Value::Object(Map::new()),
            sha: None,
        }
    }
}

/// Response to a successful save: the new content hash to use next time.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResult {
    pub ok: bool,
    pub sha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_serializes_without_sha() {
        let json = serde_json::to_value(TranslationsDocument::empty()).unwrap();
        assert_eq!(json["translations"], serde_json::json!({}));
        assert!(json.get("sha").is_none());
    }

    #[test]
    fn test_save_request_deserializes() {
        let req: TranslationsRequest = serde_json::from_str(
            r#"{"action": "save", "translations": {"nav.home": "Accueil"}, "sha": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(req.action.as_deref(), Some("save"));
        assert_eq!(req.sha.as_deref(), Some("abc123"));
        assert_eq!(req.translations.unwrap()["nav.home"], "Accueil");
    }
}
