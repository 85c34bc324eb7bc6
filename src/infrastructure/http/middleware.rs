//! HTTP Middleware
//!
//! 请求结果日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求结果日志中间件
///
/// 4xx 记为 warn，5xx 记为 error，其余只在 debug 级别输出
/// 业务错误的细节在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request as HttpRequest, StatusCode},
        Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{create_routes, AppState};
    use crate::infrastructure::memory::InMemoryTodoListRepository;

    fn logged_api() -> Router {
        let state = AppState::new(Arc::new(InMemoryTodoListRepository::new()));
        create_routes()
            .layer(axum::middleware::from_fn(request_logging_middleware))
            .with_state(Arc::new(state))
    }

    fn post_list(body: &'static str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method(Method::POST)
            .uri("/api/lists")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_created_list_passes_through() {
        let response = logged_api().oneshot(post_list(r#"{"name":"Chores"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_blank_name_passes_through_as_422() {
        let response = logged_api().oneshot(post_list(r#"{"name":"  "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_list_passes_through_as_404() {
        let request = HttpRequest::builder()
            .uri("/api/lists/65f0c0ffee0000000000beef")
            .body(Body::empty())
            .unwrap();

        let response = logged_api().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
