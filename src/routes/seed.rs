//! Bulk initialization endpoint
//!
//! `POST /api/initialize-data` is DESTRUCTIVE: it wipes the content
//! collections before inserting the sample set. It exists for environment
//! bootstrapping and test setup; the same reset is available out-of-band
//! via the `escape-plan-seed` binary.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::seed::{self, SeedSummary};
use crate::server::AppState;
use crate::types::Result;

/// Reseed acknowledgement
#[derive(Serialize)]
pub struct InitializeResponse {
    pub status: &'static str,
    pub inserted: SeedSummary,
}

/// Handle `POST /api/initialize-data`
pub async fn initialize_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InitializeResponse>> {
    warn!("Destructive reseed requested over HTTP");
    let inserted = seed::initialize_sample_data(&state.store).await?;
    Ok(Json(InitializeResponse {
        status: "Sample data initialized successfully",
        inserted,
    }))
}
