use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("completion provider not available")]
    ProviderUnavailable,

    #[error("OPENAI_API_KEY not configured")]
    ApiKeyMissing,

    #[error("prompt is required")]
    PromptRequired,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("OpenAI API error: {0}")]
    OpenAi(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::PromptRequired => 400,
            Self::ProviderUnavailable
            | Self::ApiKeyMissing
            | Self::InvalidBody(_)
            | Self::OpenAi(_)
            | Self::Internal(_) => 500,
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::MethodNotAllowed => "Method not allowed",
            Self::ProviderUnavailable => "OpenAI library not installed",
            Self::ApiKeyMissing => "OpenAI API key not configured",
            Self::PromptRequired => "Prompt is required",
            Self::InvalidBody(_) | Self::OpenAi(_) | Self::Internal(_) => "Internal server error",
        }
    }
}
