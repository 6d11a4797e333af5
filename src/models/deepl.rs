use serde::Deserialize;

/// Fixed formality preference sent with every translation request.
pub const FORMALITY: &str = "prefer_more"; // formal tone for brand content

/// Inbound payload for the translation proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub target_lang: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default)]
    pub tag_handling: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

fn default_source_lang() -> String {
    "EN".to_string()
}

impl TranslateRequest {
    /// `action: "usage"` short-circuits translation entirely.
    pub fn is_usage_check(&self) -> bool {
        self.action.as_deref() == Some("usage")
    }

    /// Build the form-encoded parameter list for the translate call:
    /// one `text` pair per input string, `target_lang` untouched (regional
    /// variants like PT-PT must survive), `source_lang` uppercased.
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(self.texts.len() + 4);
        for text in &self.texts {
            params.push(("text", text.clone()));
        }
        params.push(("target_lang", self.target_lang.clone()));
        params.push(("source_lang", self.source_lang.to_uppercase()));
        if let Some(tag_handling) = &self.tag_handling {
            params.push(("tag_handling", tag_handling.clone()));
        }
        params.push(("formality", FORMALITY.to_string()));
        params
    }
}
