//! Quiz endpoints: question reads and answer submission

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::db::schemas::QuizQuestionDoc;
use crate::server::AppState;
use crate::services::{grade, GradeResult};
use crate::types::Result;

/// Query parameters for the quiz listing
#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    /// Lesson order index to scope the questions to
    pub module_id: Option<u32>,
}

/// Handle `GET /api/courses/{course_id}/quiz?module_id=<int>`
pub async fn get_course_quiz(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    Query(query): Query<QuizQuery>,
) -> Result<Json<Vec<QuizQuestionDoc>>> {
    Ok(Json(
        state.content.course_quiz(&course_id, query.module_id).await?,
    ))
}

/// Query parameters for answer submission
///
/// Submissions arrive as query parameters for compatibility with existing
/// clients. `course_id` is accepted but grading only needs the question.
#[derive(Debug, Deserialize)]
pub struct SubmitQuery {
    pub course_id: String,
    pub question_id: String,
    pub answer: String,
}

/// Handle `POST /api/quiz/submit?course_id&question_id&answer`
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubmitQuery>,
) -> Result<Json<GradeResult>> {
    debug!(
        course_id = %query.course_id,
        question_id = %query.question_id,
        "Grading quiz submission"
    );
    let question = state.content.quiz_question(&query.question_id).await?;
    Ok(Json(grade(&question, &query.answer)))
}
