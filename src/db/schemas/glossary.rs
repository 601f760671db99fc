//! Glossary term document schema

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for glossary terms
pub const GLOSSARY_COLLECTION: &str = "glossary";

/// Glossary term document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GlossaryTermDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Term identifier (UUID string)
    pub id: String,

    pub term: String,
    pub definition: String,
    pub category: String,

    /// Related terms, referenced loosely by name (no referential integrity)
    #[serde(default)]
    pub related_terms: Vec<String>,
}

impl GlossaryTermDoc {
    /// Create a new glossary term
    pub fn new(term: &str, definition: &str, category: &str, related_terms: Vec<&str>) -> Self {
        Self {
            _id: None,
            metadata: Metadata::new(),
            id: Uuid::new_v4().to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
            category: category.to_string(),
            related_terms: related_terms.into_iter().map(String::from).collect(),
        }
    }
}

impl IntoIndexes for GlossaryTermDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // Unique index on the public term id
            (
                doc! { "id": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .name("glossary_id_unique".to_string())
                        .build(),
                ),
            ),
            // Index on term for name lookups
            (
                doc! { "term": 1 },
                Some(
                    IndexOptions::builder()
                        .name("glossary_term_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl MutMetadata for GlossaryTermDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
