//! Liveness endpoints

use axum::extract::State;
use axum::Json;
use bson::doc;
use serde::Serialize;
use std::sync::Arc;

use crate::server::AppState;

/// Root liveness message, kept stable for existing clients
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Handle `GET /api/`
pub async fn api_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "IRS Escape Plan API is running",
    })
}

/// Health probe response
#[derive(Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Handle `GET /health`
///
/// A liveness probe: returns 200 whenever the service is running. The
/// `database` field reports the result of a live ping so callers can tell
/// a healthy process from one that has lost its store.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match state
        .mongo
        .inner()
        .database(state.mongo.db_name())
        .run_command(doc! { "ping": 1 })
        .await
    {
        Ok(_) => "connected",
        Err(_) => "unreachable",
    };

    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_carries_the_probe_fields() {
        let body = serde_json::to_value(HealthResponse {
            healthy: true,
            version: env!("CARGO_PKG_VERSION"),
            database: "unreachable",
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
        .unwrap();
        assert_eq!(body["healthy"], true);
        assert_eq!(body["database"], "unreachable");
        assert!(body["version"].is_string());
    }

    // The connected/unreachable split requires a running MongoDB instance.
}
