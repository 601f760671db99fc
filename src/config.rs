//! Configuration for the Escape Plan API
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Escape Plan API - learning platform content backend
#[derive(Parser, Debug, Clone)]
#[command(name = "escape-plan-api")]
#[command(about = "Content backend for the IRS Escape Plan learning platform")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8001")]
    pub listen: SocketAddr,

    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "escape_plan")]
    pub mongodb_db: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum documents fetched per collection query (no pagination)
    #[arg(long, env = "FETCH_LIMIT", default_value = "1000")]
    pub fetch_limit: i64,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_limit <= 0 {
            return Err("FETCH_LIMIT must be positive".to_string());
        }
        if self.mongodb_db.is_empty() {
            return Err("MONGODB_DB must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_validate() {
        let args = Args::parse_from(["escape-plan-api"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.fetch_limit, 1000);
    }

    #[test]
    fn rejects_non_positive_fetch_limit() {
        let args = Args::parse_from(["escape-plan-api", "--fetch-limit", "0"]);
        assert!(args.validate().is_err());
    }
}
