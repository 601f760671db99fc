//! User progress endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::db::schemas::UserProgressDoc;
use crate::server::AppState;
use crate::types::Result;

/// Acknowledgement for progress writes
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Handle `POST /api/progress`
///
/// Upserts by (user_id, course_id, lesson_id); posting twice for the same
/// triple overwrites the earlier record.
pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    Json(record): Json<UserProgressDoc>,
) -> Result<Json<StatusResponse>> {
    state.ledger.update_progress(record).await?;
    Ok(Json(StatusResponse { status: "success" }))
}

/// Handle `GET /api/progress/{user_id}`
pub async fn get_user_progress(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserProgressDoc>>> {
    Ok(Json(state.ledger.user_progress(&user_id).await?))
}
