use super::types::ChatCompletionRequest;
use super::CompletionProvider;
use async_trait::async_trait;
use codegen_errors::AppError;
use std::sync::{Arc, Mutex};

/// Test double for [`CompletionProvider`]: records every request it receives
/// and replies with canned content, cycling when several are queued.
pub struct MockCompletionProvider {
    responses: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, content: &str) -> Self {
        self.responses.lock().unwrap().push(content.to_string());
        self
    }

    pub fn recorded_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        _api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<String, AppError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.requests.lock().unwrap().push(request);

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("// generated".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
