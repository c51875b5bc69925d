//! Bundled status application.
//!
//! The default delegate behind `status:app`. It gives the produced image
//! something to serve out of the box: a JSON banner at the root and a
//! liveness endpoint. Anything richer belongs to a real registered
//! application, not the bootstrap.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::app::AppFactory;

/// Factory for the status application.
pub struct StatusApp;

impl AppFactory for StatusApp {
    fn build(&self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/health", get(health))
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Service Bootstrap API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_returns_service_banner() {
        let app = StatusApp.build();
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Service Bootstrap API");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = StatusApp.build();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn each_build_returns_a_fresh_router() {
        // A restart rebuilds the app; both generations must serve.
        for _ in 0..2 {
            let app = StatusApp.build();
            let response = app
                .oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
