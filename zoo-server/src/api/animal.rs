//! Animal 路由

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};

use super::RecordId;
use crate::db::models::EntityKind;
use crate::db::repository::animal;
use crate::server::AppState;
use crate::utils::{AppError, AppResult};
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/animal/{id}", get(get_by_id))
}

/// GET /animal/{id} - 动物详情，含饲养员和围栏
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Html<String>> {
    let id = id.storage_id().ok_or(AppError::NotFound(EntityKind::Animal))?;
    let detail = animal::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Animal))?;
    Ok(Html(views::animal(&detail).into_string()))
}
