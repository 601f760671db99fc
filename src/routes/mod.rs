//! HTTP routes for the Escape Plan API
//!
//! All resource routes live under `/api`; `/health` sits at the root for
//! load-balancer probes. CORS is wide open - the API carries no credentials.

pub mod courses;
pub mod glossary;
pub mod health;
pub mod progress;
pub mod quiz;
pub mod seed;
pub mod tools;
pub mod xp;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::server::AppState;

/// Compose the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/", get(health::api_root))
        .route("/courses", get(courses::list_courses))
        .route("/courses/:course_id", get(courses::get_course))
        .route("/courses/:course_id/lessons", get(courses::get_course_lessons))
        .route("/courses/:course_id/quiz", get(quiz::get_course_quiz))
        .route("/quiz/submit", post(quiz::submit_answer))
        .route("/glossary", get(glossary::list_terms))
        .route("/glossary/search", get(glossary::search_terms))
        .route("/glossary/:term_id", get(glossary::get_term))
        .route("/tools", get(tools::list_tools))
        .route("/tools/:tool_id", get(tools::get_tool))
        .route("/progress", post(progress::update_progress))
        .route("/progress/:user_id", get(progress::get_user_progress))
        .route("/users/xp/glossary", post(xp::award_glossary_xp))
        .route("/users/xp/quiz", post(xp::award_quiz_xp))
        .route("/users/xp/:user_id", get(xp::get_user_xp))
        .route("/initialize-data", post(seed::initialize_data));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
