use crate::application::{CodeGenerationHandler, GenerateCode};
use crate::infrastructure::openai::{CompletionProvider, OpenAiClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub handler: Arc<CodeGenerationHandler>,
}

impl AppContext {
    pub fn new_openai(api_key: Option<String>) -> Self {
        Self::with_provider(Some(Arc::new(OpenAiClient::new())), api_key)
    }

    pub fn with_provider(
        provider: Option<Arc<dyn CompletionProvider>>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            handler: Arc::new(CodeGenerationHandler::new(GenerateCode::new(
                provider, api_key,
            ))),
        }
    }

    /// Reads the credential once at startup. A missing key does not abort the
    /// process; generation requests will answer with a structured error.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        match &api_key {
            Some(_) => tracing::info!("Using OpenAI backend"),
            None => tracing::warn!("OPENAI_API_KEY is not set, generation requests will fail"),
        }

        Self::new_openai(api_key)
    }
}
