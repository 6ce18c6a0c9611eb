use super::GenerateCode;
use crate::domain::{FunctionEvent, FunctionResponse};
use codegen_errors::AppError;

/// Entry point for one HTTP-shaped invocation. Dispatches on method, then
/// hands the raw body to [`GenerateCode`]; every outcome becomes a
/// [`FunctionResponse`].
pub struct CodeGenerationHandler {
    generate_code: GenerateCode,
}

impl CodeGenerationHandler {
    pub fn new(generate_code: GenerateCode) -> Self {
        Self { generate_code }
    }

    pub async fn handle(&self, event: &FunctionEvent) -> FunctionResponse {
        if event.http_method == "OPTIONS" {
            return FunctionResponse::preflight();
        }

        if event.http_method != "POST" {
            return error_response(&AppError::MethodNotAllowed);
        }

        // An absent body parses as the empty object, so field defaults apply.
        let raw_body = event.body.as_deref().unwrap_or("{}");

        match self.generate_code.execute(raw_body).await {
            Ok(generated) => match serde_json::to_string(&generated) {
                Ok(body) => FunctionResponse::json(200, body),
                Err(e) => error_response(&AppError::Internal(e.to_string())),
            },
            Err(err) => error_response(&err),
        }
    }
}

fn error_response(err: &AppError) -> FunctionResponse {
    if err.status_code() >= 500 {
        tracing::error!("generation request failed: {err}");
    }
    FunctionResponse::error(err.status_code(), err.user_message())
}
