//! Tool read endpoints

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::db::schemas::ToolDoc;
use crate::server::AppState;
use crate::types::Result;

/// Handle `GET /api/tools`
pub async fn list_tools(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ToolDoc>>> {
    Ok(Json(state.content.list_tools().await?))
}

/// Handle `GET /api/tools/{tool_id}`
pub async fn get_tool(
    State(state): State<Arc<AppState>>,
    Path(tool_id): Path<String>,
) -> Result<Json<ToolDoc>> {
    Ok(Json(state.content.get_tool(&tool_id).await?))
}
