//! Glossary read endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::db::schemas::GlossaryTermDoc;
use crate::server::AppState;
use crate::types::Result;

/// Handle `GET /api/glossary`
pub async fn list_terms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<GlossaryTermDoc>>> {
    Ok(Json(state.content.glossary_terms().await?))
}

/// Query parameters for glossary search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text query matched against term and definition
    pub q: String,
}

/// Handle `GET /api/glossary/search?q=`
///
/// Returns an empty list (never an error) when nothing matches.
pub async fn search_terms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<GlossaryTermDoc>>> {
    Ok(Json(state.content.search_glossary(&query.q).await?))
}

/// Handle `GET /api/glossary/{term_id}`
pub async fn get_term(
    State(state): State<Arc<AppState>>,
    Path(term_id): Path<String>,
) -> Result<Json<GlossaryTermDoc>> {
    Ok(Json(state.content.glossary_term(&term_id).await?))
}
