//! Course document schema
//!
//! A course embeds its lessons as an ordered array of sub-documents; lessons
//! have no independent lifecycle. The stored `total_lessons` counter is a
//! denormalization kept for compatibility with older seed content - reads
//! recompute it from the embedded array (see `ContentService`).

use bson::{doc, oid::ObjectId, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for courses
pub const COURSE_COLLECTION: &str = "courses";

/// Course track type
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseType {
    /// Free fundamentals track
    #[default]
    Primer,
    /// W-2 employee strategies track
    W2,
    /// Business owner strategies track
    Business,
}

/// A lesson embedded within a course
///
/// `order_index` is 1-based and scopes quiz questions to a module
/// ("Module N of M" in the client).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Lesson {
    /// Lesson identifier (UUID string)
    pub id: String,

    pub title: String,
    pub description: String,

    /// Rich text / markdown lesson body
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    pub duration_minutes: u32,

    /// 1-based position within the course
    pub order_index: u32,

    /// XP awarded for completing this lesson, when defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_available: Option<u32>,
}

impl Lesson {
    pub fn new(
        title: &str,
        description: &str,
        content: &str,
        duration_minutes: u32,
        order_index: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            video_url: None,
            duration_minutes,
            order_index,
            xp_available: None,
        }
    }
}

/// Course document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CourseDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Course identifier (UUID string)
    pub id: String,

    #[serde(rename = "type")]
    pub course_type: CourseType,

    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub is_free: bool,

    /// Declared lesson count; may drift from `lessons.len()` in stored
    /// documents, reads recompute it
    pub total_lessons: u32,

    pub estimated_hours: u32,

    #[serde(default)]
    pub lessons: Vec<Lesson>,

    pub created_at: DateTime<Utc>,
}

impl Default for CourseDoc {
    fn default() -> Self {
        Self {
            _id: None,
            metadata: Metadata::default(),
            id: String::new(),
            course_type: CourseType::default(),
            title: String::new(),
            description: String::new(),
            thumbnail_url: String::new(),
            is_free: false,
            total_lessons: 0,
            estimated_hours: 0,
            lessons: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

impl CourseDoc {
    /// Create a new course document
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        course_type: CourseType,
        title: &str,
        description: &str,
        thumbnail_url: &str,
        is_free: bool,
        total_lessons: u32,
        estimated_hours: u32,
        lessons: Vec<Lesson>,
    ) -> Self {
        Self {
            _id: None,
            metadata: Metadata::new(),
            id: Uuid::new_v4().to_string(),
            course_type,
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            is_free,
            total_lessons,
            estimated_hours,
            lessons,
            created_at: Utc::now(),
        }
    }
}

impl IntoIndexes for CourseDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // Unique index on the public course id
            (
                doc! { "id": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .name("course_id_unique".to_string())
                        .build(),
                ),
            ),
            // Index on type for track lookups
            (
                doc! { "type": 1 },
                Some(
                    IndexOptions::builder()
                        .name("course_type_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl MutMetadata for CourseDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_type_uses_snake_case_wire_names() {
        assert_eq!(serde_json::to_string(&CourseType::Primer).unwrap(), "\"primer\"");
        assert_eq!(serde_json::to_string(&CourseType::W2).unwrap(), "\"w2\"");
        assert_eq!(serde_json::to_string(&CourseType::Business).unwrap(), "\"business\"");
    }

    #[test]
    fn new_course_gets_uuid_and_timestamps() {
        let course = CourseDoc::new(
            CourseType::Primer,
            "Test",
            "A test course",
            "https://example.com/thumb.jpg",
            true,
            1,
            1,
            vec![Lesson::new("L1", "d", "c", 10, 1)],
        );
        assert!(!course.id.is_empty());
        assert!(course.metadata.created_at.is_some());
        assert_eq!(course.lessons[0].order_index, 1);
    }
}
