//! Business services for the Escape Plan API

pub mod content;
pub mod grading;
pub mod progress;
pub mod xp;

pub use content::ContentService;
pub use grading::{grade, GradeResult};
pub use progress::ProgressLedger;
pub use xp::{XpAccumulator, XpSummary, GLOSSARY_XP_AWARD};
