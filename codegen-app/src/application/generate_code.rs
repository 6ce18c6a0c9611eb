use crate::domain::{language, CodeRequest, GeneratedCode};
use crate::infrastructure::openai::{
    build_system_prompt, ChatCompletionRequest, CompletionProvider, MODEL,
};
use codegen_errors::AppError;
use std::sync::Arc;

/// Single generation use case. Both the provider and the credential are
/// injected at construction; an absent provider or credential surfaces as a
/// structured error on every call rather than failing startup.
pub struct GenerateCode {
    provider: Option<Arc<dyn CompletionProvider>>,
    api_key: Option<String>,
}

impl GenerateCode {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    /// Runs the checks in a fixed order: provider, credential, body parse,
    /// prompt presence. A malformed body is only ever reported when the
    /// earlier checks pass.
    pub async fn execute(&self, raw_body: &str) -> Result<GeneratedCode, AppError> {
        let provider = self.provider.as_ref().ok_or(AppError::ProviderUnavailable)?;

        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AppError::ApiKeyMissing)?;

        let request: CodeRequest = serde_json::from_str(raw_body)
            .map_err(|e| AppError::InvalidBody(e.to_string()))?;

        if request.prompt.is_empty() {
            return Err(AppError::PromptRequired);
        }

        let system_prompt = build_system_prompt(language::display_name(&request.language));
        let completion =
            ChatCompletionRequest::new(MODEL, system_prompt, request.prompt.clone());

        let code = provider.complete(api_key, completion).await?;

        // The requested language is echoed back verbatim even when the
        // catalog lookup fell back for prompting.
        Ok(GeneratedCode::new(code, request.language, MODEL.to_string()))
    }
}
