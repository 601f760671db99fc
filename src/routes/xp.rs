//! User XP endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::server::AppState;
use crate::services::XpSummary;
use crate::types::Result;

/// Body for glossary XP awards
#[derive(Debug, Deserialize)]
pub struct GlossaryAward {
    pub user_id: String,
    pub term_id: String,
}

/// Handle `POST /api/users/xp/glossary`
///
/// The referenced term must exist; the award itself is a fixed amount per
/// view and is not deduplicated by the store.
pub async fn award_glossary_xp(
    State(state): State<Arc<AppState>>,
    Json(award): Json<GlossaryAward>,
) -> Result<Json<XpSummary>> {
    // Referential check before the counters move
    state.content.glossary_term(&award.term_id).await?;
    Ok(Json(
        state.xp.award_glossary_xp(&award.user_id, &award.term_id).await?,
    ))
}

/// Body for quiz XP awards
#[derive(Debug, Deserialize)]
pub struct QuizAward {
    pub user_id: String,
    /// Point value as returned by grading
    pub points: i64,
}

/// Handle `POST /api/users/xp/quiz`
pub async fn award_quiz_xp(
    State(state): State<Arc<AppState>>,
    Json(award): Json<QuizAward>,
) -> Result<Json<XpSummary>> {
    Ok(Json(state.xp.award_quiz_xp(&award.user_id, award.points).await?))
}

/// Handle `GET /api/users/xp/{user_id}`
///
/// Users with no recorded activity get all-zero counters, not an error.
pub async fn get_user_xp(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<XpSummary>> {
    Ok(Json(state.xp.user_xp(&user_id).await?))
}
