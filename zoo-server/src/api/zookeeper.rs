//! Zookeeper 路由

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};

use super::RecordId;
use crate::db::models::EntityKind;
use crate::db::repository::zookeeper;
use crate::server::AppState;
use crate::utils::{AppError, AppResult};
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/zookeeper/{id}", get(get_by_id))
}

/// GET /zookeeper/{id} - 饲养员详情及其照料的动物
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Html<String>> {
    let id = id.storage_id().ok_or(AppError::NotFound(EntityKind::Zookeeper))?;
    let detail = zookeeper::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Zookeeper))?;
    Ok(Html(views::zookeeper(&detail).into_string()))
}
