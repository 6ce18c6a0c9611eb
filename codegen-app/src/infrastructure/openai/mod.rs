mod client;
mod mock;
mod prompt;
mod types;

pub use client::{OpenAiClient, MODEL};
pub use mock::MockCompletionProvider;
pub use prompt::build_system_prompt;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, Message};

use async_trait::async_trait;
use codegen_errors::AppError;

/// Single-shot chat completion: system + user messages in, first choice
/// content out. The credential is passed per call, mirroring the stateless
/// invocation model of the handler.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<String, AppError>;
}
