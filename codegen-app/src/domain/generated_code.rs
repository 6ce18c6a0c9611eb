use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
    pub language: String,
    pub model: String,
}

impl GeneratedCode {
    pub fn new(code: String, language: String, model: String) -> Self {
        Self {
            code,
            language,
            model,
        }
    }
}
