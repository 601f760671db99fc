//! User XP document schema
//!
//! One document per user, holding the split quiz/glossary accumulators.
//! Counters are only ever moved with atomic `$inc` upserts, so
//! `total_xp == quiz_xp + glossary_xp` holds at all times.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for user XP records
pub const USER_XP_COLLECTION: &str = "user_xp";

/// User XP document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UserXpDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Record identifier (UUID string)
    #[serde(default = "new_uuid")]
    pub id: String,

    pub user_id: String,

    #[serde(default)]
    pub total_xp: i64,

    #[serde(default)]
    pub quiz_xp: i64,

    #[serde(default)]
    pub glossary_xp: i64,
}

fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}

impl IntoIndexes for UserXpDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "user_id": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .name("xp_user_unique".to_string())
                    .build(),
            ),
        )]
    }
}

impl MutMetadata for UserXpDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
