use super::language::DEFAULT_LANGUAGE;
use serde::Deserialize;

/// Decoded request body for a generation call.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
