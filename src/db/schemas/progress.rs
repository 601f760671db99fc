//! User progress document schema
//!
//! At most one progress record exists per (user, course, lesson) triple;
//! writes go through the progress ledger's upsert.

use bson::{doc, oid::ObjectId, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for user progress records
pub const USER_PROGRESS_COLLECTION: &str = "user_progress";

/// User progress document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UserProgressDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Record identifier (UUID string); stable across upserts
    #[serde(default = "new_uuid")]
    pub id: String,

    pub user_id: String,
    pub course_id: String,
    pub lesson_id: String,

    #[serde(default)]
    pub completed: bool,

    /// Quiz score for the lesson, when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}

impl UserProgressDoc {
    /// Create a new progress record
    pub fn new(user_id: &str, course_id: &str, lesson_id: &str) -> Self {
        Self {
            _id: None,
            metadata: Metadata::new(),
            id: new_uuid(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            lesson_id: lesson_id.to_string(),
            completed: false,
            score: None,
            completed_at: None,
        }
    }
}

impl IntoIndexes for UserProgressDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // One record per (user, course, lesson)
            (
                doc! { "user_id": 1, "course_id": 1, "lesson_id": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .name("progress_user_course_lesson_unique".to_string())
                        .build(),
                ),
            ),
            // Index serving the per-user listing
            (
                doc! { "user_id": 1 },
                Some(
                    IndexOptions::builder()
                        .name("progress_user_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl MutMetadata for UserProgressDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
