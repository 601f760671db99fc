//! Escape Plan API - content backend for the IRS Escape Plan learning platform
//!
//! Stores courses (with embedded, ordered lessons), quiz questions, a tax
//! glossary, and interactive tools in MongoDB, and serves them over a JSON
//! REST API together with per-user progress and XP tracking.
//!
//! ## Components
//!
//! - **Content store**: typed MongoDB collections for courses, quiz
//!   questions, glossary terms, and tools
//! - **Content service**: read-oriented projections (course list/detail,
//!   lessons, quiz-by-module, glossary search, tool list)
//! - **Quiz grading**: stateless answer comparison with per-type rules
//! - **Progress ledger**: lesson-completion upserts keyed by
//!   (user, course, lesson)
//! - **XP accumulator**: quiz and glossary experience-point counters
//! - **Seeding**: destructive sample-data reset, exposed both as an
//!   endpoint and as the `escape-plan-seed` binary

pub mod config;
pub mod db;
pub mod routes;
pub mod seed;
pub mod server;
pub mod services;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{ApiError, Result};
