//! Enclosure 路由

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};

use super::RecordId;
use crate::db::models::EntityKind;
use crate::db::repository::enclosure;
use crate::server::AppState;
use crate::utils::{AppError, AppResult};
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/enclosure/{id}", get(get_by_id))
}

/// GET /enclosure/{id} - 围栏详情及其中的动物
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Html<String>> {
    let id = id.storage_id().ok_or(AppError::NotFound(EntityKind::Enclosure))?;
    let detail = enclosure::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(EntityKind::Enclosure))?;
    Ok(Html(views::enclosure(&detail).into_string()))
}
