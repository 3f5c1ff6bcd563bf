//! HTTP 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 欢迎页 |
//! | /animal/{id} | GET | 动物详情 |
//! | /zookeeper/{id} | GET | 饲养员详情 |
//! | /enclosure/{id} | GET | 围栏详情 |
//! | /health | GET | 健康检查 (JSON) |
//!
//! Ids are taken as [`RecordId`]: anything but plain ASCII digits (`+1`, `-1`,
//! `1.5`, `abc`) is rejected by the `Path` extractor with 400 before any
//! handler runs. Leading zeros are accepted.

pub mod animal;
pub mod enclosure;
pub mod health;
pub mod home;
pub mod zookeeper;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use serde::{Deserialize, Deserializer, de};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::server::AppState;
use crate::server::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(animal::router())
        .merge(zookeeper::router())
        .merge(enclosure::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: AppState) -> Router {
    build_router()
        // Request logging - innermost, sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Copy the request id onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Generate an id unless the client sent one - outermost
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

/// Record id taken from the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Ids above `i64::MAX` cannot be SQLite rowids, so they can never match a record
    fn storage_id(self) -> Option<i64> {
        i64::try_from(self.0).ok()
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_record_id(&raw)
            .map(RecordId)
            .ok_or_else(|| de::Error::custom(format!("invalid id `{raw}`: expected digits only")))
    }
}

// `u64::from_str` alone would also take a leading `+`
fn parse_record_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_id_bounds() {
        assert_eq!(RecordId(0).storage_id(), Some(0));
        assert_eq!(RecordId(42).storage_id(), Some(42));
        assert_eq!(RecordId(i64::MAX as u64).storage_id(), Some(i64::MAX));
        assert_eq!(RecordId(i64::MAX as u64 + 1).storage_id(), None);
    }

    #[test]
    fn test_parse_record_id_digits_only() {
        assert_eq!(parse_record_id("1"), Some(1));
        assert_eq!(parse_record_id("001"), Some(1));
        assert_eq!(parse_record_id("9223372036854775808"), Some(9223372036854775808));

        for raw in ["", "+1", "-1", "1.5", " 1", "1 ", "abc", "１"] {
            assert_eq!(parse_record_id(raw), None, "{raw:?}");
        }
        // Digits, but past u64
        assert_eq!(parse_record_id("18446744073709551616"), None);
    }
}
