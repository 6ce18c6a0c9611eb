use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound HTTP-shaped invocation event.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionEvent {
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionEvent {
    pub fn new(http_method: String, body: Option<String>) -> Self {
        Self { http_method, body }
    }
}

/// Outbound HTTP-shaped invocation result.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl FunctionResponse {
    /// Empty 200 answering a CORS preflight.
    pub fn preflight() -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            "*".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            "POST, OPTIONS".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        );
        headers.insert("Access-Control-Max-Age".to_string(), "86400".to_string());

        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            "*".to_string(),
        );

        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(
            status_code,
            serde_json::json!({ "error": message }).to_string(),
        )
    }
}
