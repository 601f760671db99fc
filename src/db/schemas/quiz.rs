//! Quiz question document schema
//!
//! Questions are top-level documents referencing their owning course by id
//! and their owning module by lesson order index.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for quiz questions
pub const QUIZ_QUESTION_COLLECTION: &str = "quiz_questions";

/// Question type, deciding how submissions are graded
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizQuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
    Scenario,
}

/// Quiz question document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct QuizQuestionDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Question identifier (UUID string)
    pub id: String,

    pub question: String,

    #[serde(rename = "type")]
    pub question_type: QuizQuestionType,

    /// Ordered option strings; for multiple_choice, `correct_answer` must be
    /// one of these
    #[serde(default)]
    pub options: Vec<String>,

    pub correct_answer: String,
    pub explanation: String,

    /// Points awarded on a correct answer
    #[serde(default = "default_points")]
    pub points: u32,

    /// Owning course id (weak reference, no cascade delete)
    pub course_id: String,

    /// Owning module: the lesson order index this question belongs to
    #[serde(default = "default_module_id")]
    pub module_id: u32,
}

fn default_points() -> u32 {
    10
}

fn default_module_id() -> u32 {
    1
}

impl QuizQuestionDoc {
    /// Create a new quiz question
    pub fn new(
        question: &str,
        question_type: QuizQuestionType,
        options: Vec<&str>,
        correct_answer: &str,
        explanation: &str,
        course_id: &str,
        module_id: u32,
    ) -> Self {
        Self {
            _id: None,
            metadata: Metadata::new(),
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            question_type,
            options: options.into_iter().map(String::from).collect(),
            correct_answer: correct_answer.to_string(),
            explanation: explanation.to_string(),
            points: default_points(),
            course_id: course_id.to_string(),
            module_id,
        }
    }
}

impl IntoIndexes for QuizQuestionDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // Unique index on the public question id
            (
                doc! { "id": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .name("quiz_question_id_unique".to_string())
                        .build(),
                ),
            ),
            // Compound index serving the quiz-by-course(-module) reads
            (
                doc! { "course_id": 1, "module_id": 1 },
                Some(
                    IndexOptions::builder()
                        .name("quiz_course_module_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl MutMetadata for QuizQuestionDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&QuizQuestionType::MultipleChoice).unwrap(),
            "\"multiple_choice\""
        );
        assert_eq!(
            serde_json::to_string(&QuizQuestionType::TrueFalse).unwrap(),
            "\"true_false\""
        );
        assert_eq!(
            serde_json::to_string(&QuizQuestionType::Scenario).unwrap(),
            "\"scenario\""
        );
    }

    #[test]
    fn legacy_questions_default_to_module_one() {
        // Older seed content predates the module_id field
        let json = r#"{
            "id": "q1",
            "question": "Q?",
            "type": "multiple_choice",
            "options": ["a", "b"],
            "correct_answer": "a",
            "explanation": "because",
            "course_id": "c1"
        }"#;
        let q: QuizQuestionDoc = serde_json::from_str(json).unwrap();
        assert_eq!(q.module_id, 1);
        assert_eq!(q.points, 10);
    }
}
