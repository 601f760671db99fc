//! Course read endpoints

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::db::schemas::{CourseDoc, Lesson};
use crate::server::AppState;
use crate::types::Result;

/// Handle `GET /api/courses`
pub async fn list_courses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CourseDoc>>> {
    Ok(Json(state.content.list_courses().await?))
}

/// Handle `GET /api/courses/{course_id}`
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseDoc>> {
    Ok(Json(state.content.get_course(&course_id).await?))
}

/// Handle `GET /api/courses/{course_id}/lessons`
pub async fn get_course_lessons(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<Lesson>>> {
    Ok(Json(state.content.course_lessons(&course_id).await?))
}
