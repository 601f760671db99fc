//! Shared types for the Escape Plan API

mod error;

pub use error::{ApiError, Result};
