#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use tower::ServiceExt;
use zoo_server::db::fixtures::SEED;
use zoo_server::{AppState, DbService, api};

pub async fn seeded_state() -> AppState {
    let db = DbService::in_memory().await.unwrap();
    for stmt in SEED {
        sqlx::query(stmt).execute(&db.pool).await.unwrap();
    }
    AppState::new(db)
}

pub async fn empty_state() -> AppState {
    AppState::new(DbService::in_memory().await.unwrap())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let header_str = |name: http::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let content_type = header_str(header::CONTENT_TYPE);
    let request_id = header_str(http::HeaderName::from_static("x-request-id"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        content_type,
        request_id,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn app(state: AppState) -> Router {
    api::build_app(state)
}
