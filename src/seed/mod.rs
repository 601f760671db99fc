//! Sample-data seeding
//!
//! `initialize_sample_data` is a destructive reset: it deletes every document
//! in the content collections, then inserts the fixed seed set. Running it
//! twice produces the same end state, but it is never additive. There is no
//! rollback; a failure partway through can leave collections partially
//! populated, which is accepted for this administrative operation.
//!
//! Exposed through `POST /api/initialize-data` and the `escape-plan-seed`
//! binary.

mod data;

use bson::doc;
use serde::Serialize;
use tracing::{info, warn};

use crate::db::schemas::QuizQuestionType;
use crate::db::ContentStore;
use crate::types::{ApiError, Result};

pub use data::{sample_courses, sample_glossary_terms, sample_quiz_questions, sample_tools};

/// Counts of inserted seed documents
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub courses: usize,
    pub quiz_questions: usize,
    pub glossary_terms: usize,
    pub tools: usize,
}

/// Destructively reseed the content collections
///
/// Clears courses, quiz questions, glossary, and tools, then inserts the
/// sample content. User progress and XP are left untouched.
pub async fn initialize_sample_data(store: &ContentStore) -> Result<SeedSummary> {
    let courses = sample_courses();
    let questions = sample_quiz_questions(&courses);
    let terms = sample_glossary_terms();
    let tools = sample_tools();

    // Referential check at write time: a multiple-choice answer that is not
    // one of its options would be ungradeable
    for q in &questions {
        if q.question_type == QuizQuestionType::MultipleChoice
            && !q.options.contains(&q.correct_answer)
        {
            return Err(ApiError::Internal(format!(
                "Seed question '{}' has a correct answer outside its options",
                q.question
            )));
        }
    }

    // Clear existing data
    let removed_courses = store.courses.delete_many(doc! {}).await?;
    let removed_questions = store.quiz_questions.delete_many(doc! {}).await?;
    let removed_terms = store.glossary.delete_many(doc! {}).await?;
    let removed_tools = store.tools.delete_many(doc! {}).await?;
    if removed_courses + removed_questions + removed_terms + removed_tools > 0 {
        warn!(
            courses = removed_courses,
            quiz_questions = removed_questions,
            glossary_terms = removed_terms,
            tools = removed_tools,
            "Cleared existing content before reseeding"
        );
    }

    let summary = SeedSummary {
        courses: store.courses.insert_many(courses).await?,
        quiz_questions: store.quiz_questions.insert_many(questions).await?,
        glossary_terms: store.glossary.insert_many(terms).await?,
        tools: store.tools.insert_many(tools).await?,
    };

    info!(
        courses = summary.courses,
        quiz_questions = summary.quiz_questions,
        glossary_terms = summary.glossary_terms,
        tools = summary.tools,
        "Sample data initialized"
    );

    Ok(summary)
}
