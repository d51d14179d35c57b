pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health::status_handler))
        .route("/health", get(health::status_handler))
        .route(
            "/api/v1/enhance/summary",
            post(handlers::handle_enhance_summary),
        )
        .route(
            "/api/v1/enhance/skills",
            post(handlers::handle_prioritize_skills),
        )
        .route("/api/v1/enhance/tips", post(handlers::handle_generate_tips))
        .route("/api/v1/enhance/cv", post(handlers::handle_optimize_cv))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::enhancement::enhancer::DemoEnhancer;

    fn demo_router() -> Router {
        build_router(AppState {
            enhancer: Arc::new(DemoEnhancer),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = demo_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_reports_demo_mode() {
        let request = Request::builder().uri("/status").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "demo");
    }

    #[tokio::test]
    async fn test_health_alias() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_enhance_summary() {
        let (status, body) = send(post_json(
            "/api/v1/enhance/summary",
            json!({"basic_summary": "Web dev", "job_description": "Junior React developer"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let summary = body["enhanced_summary"].as_str().unwrap();
        assert!(summary.contains("junior-level"));
        assert!(summary.contains("React"));
    }

    #[tokio::test]
    async fn test_prioritize_skills() {
        let (status, body) = send(post_json(
            "/api/v1/enhance/skills",
            json!({"skills": ["React", "Python"], "job_description": "We need React experience"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["skills"],
            json!([
                {"name": "React", "priority": "high"},
                {"name": "Python", "priority": "low"}
            ])
        );
    }

    #[tokio::test]
    async fn test_generate_tips_returns_five() {
        let (status, body) = send(post_json(
            "/api/v1/enhance/tips",
            json!({"cv_content": "", "job_description": "React"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tips"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_optimize_cv() {
        let (status, body) = send(post_json(
            "/api/v1/enhance/cv",
            json!({
                "cv_content": "Experience:\nDid stuff\nEducation:\nBS CS",
                "job_description": "Looking for React and Redux developer"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let cv = body["optimized_cv"].as_str().unwrap();
        assert!(cv.starts_with("Professional Summary:"));
        assert!(cv.contains("using React, Redux"));
    }

    #[tokio::test]
    async fn test_blank_job_description_is_rejected() {
        let (status, body) = send(post_json(
            "/api/v1/enhance/cv",
            json!({"cv_content": "x", "job_description": "   "}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
