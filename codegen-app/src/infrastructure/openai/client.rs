use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use super::CompletionProvider;
use async_trait::async_trait;
use codegen_errors::AppError;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4";

pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: OPENAI_API_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::OpenAi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI error: {} - {}", status, body);
            return Err(AppError::OpenAi(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::OpenAi(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| AppError::OpenAi("No response from AI".to_string()))
    }
}
