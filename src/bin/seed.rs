//! Out-of-band seeding utility
//!
//! Runs the same destructive sample-data reset as `POST /api/initialize-data`
//! without starting the HTTP server. Intended for environment bootstrapping:
//!
//! ```text
//! MONGODB_URI=mongodb://localhost:27017 escape-plan-seed
//! ```

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escape_plan_api::config::Args;
use escape_plan_api::db::{ContentStore, MongoClient};
use escape_plan_api::seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("escape_plan_api={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let mongo = match MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await {
        Ok(client) => client,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let store = match ContentStore::init(&mongo).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open collections: {}", e);
            std::process::exit(1);
        }
    };

    match seed::initialize_sample_data(&store).await {
        Ok(summary) => {
            info!(
                courses = summary.courses,
                quiz_questions = summary.quiz_questions,
                glossary_terms = summary.glossary_terms,
                tools = summary.tools,
                "Seeding completed"
            );
            println!("✅ Sample data initialized successfully");
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            println!("❌ Failed to initialize sample data");
            std::process::exit(1);
        }
    }

    Ok(())
}
