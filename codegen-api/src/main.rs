use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use codegen_app::domain::{FunctionEvent, FunctionResponse};
use codegen_app::AppContext;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = AppContext::from_env();
    let app = router(app_context);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn router(app_context: AppContext) -> Router {
    Router::new()
        .route("/generate", any(handle_generate))
        .layer(CompressionLayer::new())
        .with_state(app_context)
}

/// Adapts a raw HTTP request into an invocation event and back. Method
/// dispatch lives in the handler, so every method lands here.
async fn handle_generate(
    State(ctx): State<AppContext>,
    method: Method,
    body: Bytes,
) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body).into_owned())
    };

    let event = FunctionEvent::new(method.as_str().to_string(), body);
    into_http_response(ctx.handler.handle(&event).await)
}

fn into_http_response(response: FunctionResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(Body::from(response.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use codegen_app::infrastructure::openai::MockCompletionProvider;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router(provider: Option<MockCompletionProvider>, api_key: Option<&str>) -> Router {
        let provider = provider
            .map(|p| Arc::new(p) as Arc<dyn codegen_app::infrastructure::openai::CompletionProvider>);
        router(AppContext::with_provider(provider, api_key.map(String::from)))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_preflight_over_http() {
        let app = test_router(Some(MockCompletionProvider::new()), Some("key"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            response.headers().get("Access-Control-Max-Age").unwrap(),
            "86400"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let app = test_router(Some(MockCompletionProvider::new()), Some("key"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_post_generates_code() {
        let app = test_router(
            Some(MockCompletionProvider::new().with_response("fn main() {}")),
            Some("key"),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"prompt":"entry point","language":"rust"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        let payload = body_json(response).await;
        assert_eq!(payload["code"], "fn main() {}");
        assert_eq!(payload["language"], "rust");
        assert_eq!(payload["model"], "gpt-4");
    }

    #[tokio::test]
    async fn test_post_without_credential_is_structured_500() {
        let app = test_router(Some(MockCompletionProvider::new()), None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .body(Body::from(r#"{"prompt":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "OpenAI API key not configured"
        );
    }

    #[tokio::test]
    async fn test_empty_post_body_is_prompt_required() {
        let app = test_router(Some(MockCompletionProvider::new()), Some("key"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Prompt is required");
    }
}
