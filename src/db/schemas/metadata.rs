//! Common metadata for all documents
//!
//! Tracks creation and update timestamps. Documents in this service are only
//! ever removed outright (the destructive reseed), so there is no deletion
//! marker to carry.

use bson::DateTime;
use serde::{Deserialize, Serialize};

/// Timestamps stamped by the collection wrapper on every write
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Metadata {
    /// When the document was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    /// When the document was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl Metadata {
    /// Create new metadata with current timestamp
    pub fn new() -> Self {
        Self {
            updated_at: Some(DateTime::now()),
            created_at: Some(DateTime::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_timestamps_only() {
        let doc = bson::to_document(&Metadata::new()).unwrap();
        assert!(doc.contains_key("created_at"));
        assert!(doc.contains_key("updated_at"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn unset_timestamps_are_omitted_from_the_wire() {
        let doc = bson::to_document(&Metadata::default()).unwrap();
        assert!(doc.is_empty());
    }
}
