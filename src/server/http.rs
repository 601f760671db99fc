//! HTTP server implementation
//!
//! Binds a tokio TcpListener and serves the axum router. Request handling
//! runs with ordinary per-request task parallelism; the only shared state
//! is the long-lived store handle inside `AppState`.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Args;
use crate::db::{ContentStore, MongoClient};
use crate::routes;
use crate::services::{ContentService, ProgressLedger, XpAccumulator};
use crate::types::{ApiError, Result};

/// Shared application state, constructed once at startup and passed to
/// every handler
pub struct AppState {
    pub args: Args,
    /// Client handle, kept for the health probe's ping
    pub mongo: MongoClient,
    /// Raw collection handles (used by the seeding path)
    pub store: ContentStore,
    /// Read-oriented content projections
    pub content: ContentService,
    /// Progress upserts and per-user listings
    pub ledger: ProgressLedger,
    /// Quiz/glossary XP counters
    pub xp: XpAccumulator,
}

impl AppState {
    /// Open all collections and wire up the services
    pub async fn init(args: Args, mongo: &MongoClient) -> Result<Self> {
        let store = ContentStore::init(mongo).await?;
        let content = ContentService::new(store.clone(), args.fetch_limit);
        let ledger = ProgressLedger::new(store.progress.clone(), args.fetch_limit);
        let xp = XpAccumulator::new(store.xp.clone());

        Ok(Self {
            args,
            mongo: mongo.clone(),
            store,
            content,
            ledger,
            xp,
        })
    }
}

/// Run the HTTP server until it exits
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.args.listen;
    let router = routes::build_router(Arc::clone(&state));

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
