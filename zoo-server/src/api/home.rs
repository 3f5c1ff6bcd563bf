use axum::{Router, response::Html, routing::get};

use crate::server::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

/// GET / - 欢迎页 (不访问数据库)
pub async fn welcome() -> Html<String> {
    Html(views::welcome().into_string())
}
