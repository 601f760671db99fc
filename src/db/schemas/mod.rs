//! Database schemas for the Escape Plan content store
//!
//! Defines MongoDB document structures for courses, quiz questions,
//! glossary terms, tools, user progress, and user XP.

mod course;
mod glossary;
mod metadata;
mod progress;
mod quiz;
mod tool;
mod xp;

pub use course::{CourseDoc, CourseType, Lesson, COURSE_COLLECTION};
pub use glossary::{GlossaryTermDoc, GLOSSARY_COLLECTION};
pub use metadata::Metadata;
pub use progress::{UserProgressDoc, USER_PROGRESS_COLLECTION};
pub use quiz::{QuizQuestionDoc, QuizQuestionType, QUIZ_QUESTION_COLLECTION};
pub use tool::{ToolDoc, ToolType, TOOL_COLLECTION};
pub use xp::{UserXpDoc, USER_XP_COLLECTION};
