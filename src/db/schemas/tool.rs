//! Tool document schema
//!
//! Tools are configuration-driven interactive widgets (calculators, form
//! generators, planners). The `config` mapping is open-ended; the client
//! interprets it.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for tools
pub const TOOL_COLLECTION: &str = "tools";

/// Tool type
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    #[default]
    Calculator,
    FormGenerator,
    Planner,
}

/// Tool document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ToolDoc {
    /// MongoDB document ID (internal, never exposed)
    #[serde(default, skip_serializing)]
    pub _id: Option<ObjectId>,

    /// Common metadata (created_at, updated_at)
    #[serde(default)]
    pub metadata: Metadata,

    /// Tool identifier (UUID string)
    pub id: String,

    pub name: String,
    pub description: String,

    #[serde(rename = "type")]
    pub tool_type: ToolType,

    /// Icon reference for the client
    pub icon: String,

    pub is_free: bool,

    /// Open-ended configuration (field list, etc.)
    #[serde(default)]
    pub config: Document,
}

impl ToolDoc {
    /// Create a new tool
    pub fn new(
        name: &str,
        description: &str,
        tool_type: ToolType,
        icon: &str,
        is_free: bool,
        config: Document,
    ) -> Self {
        Self {
            _id: None,
            metadata: Metadata::new(),
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tool_type,
            icon: icon.to_string(),
            is_free,
            config,
        }
    }
}

impl IntoIndexes for ToolDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "id": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .name("tool_id_unique".to_string())
                    .build(),
            ),
        )]
    }
}

impl MutMetadata for ToolDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
