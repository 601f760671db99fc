//! Per-user progress ledger
//!
//! Upserts are keyed by (user_id, course_id, lesson_id). The write is a
//! read-then-update sequence with no isolation; concurrent writers for the
//! same key converge on the same logical state, and the unique index keeps
//! duplicates out.

use bson::{doc, Bson, Document};
use tracing::debug;

use crate::db::schemas::UserProgressDoc;
use crate::db::MongoCollection;
use crate::types::Result;

/// Upsert/read API over user progress records
#[derive(Clone)]
pub struct ProgressLedger {
    progress: MongoCollection<UserProgressDoc>,
    fetch_limit: i64,
}

impl ProgressLedger {
    pub fn new(progress: MongoCollection<UserProgressDoc>, fetch_limit: i64) -> Self {
        Self { progress, fetch_limit }
    }

    /// Upsert a progress record by its (user, course, lesson) key
    ///
    /// An existing record keeps its id; only the mutable fields are
    /// overwritten.
    pub async fn update_progress(&self, record: UserProgressDoc) -> Result<()> {
        let key = progress_key(&record);

        if self.progress.find_one(key.clone()).await?.is_some() {
            debug!(
                user_id = %record.user_id,
                lesson_id = %record.lesson_id,
                "Overwriting existing progress record"
            );
            let update = doc! { "$set": progress_update(&record)? };
            self.progress.update_one(key, update).await?;
        } else {
            self.progress.insert_one(record).await?;
        }

        Ok(())
    }

    /// All progress records for a user, unordered
    pub async fn user_progress(&self, user_id: &str) -> Result<Vec<UserProgressDoc>> {
        self.progress
            .find_many(doc! { "user_id": user_id }, self.fetch_limit)
            .await
    }
}

/// Upsert key for a progress record
fn progress_key(record: &UserProgressDoc) -> Document {
    doc! {
        "user_id": &record.user_id,
        "course_id": &record.course_id,
        "lesson_id": &record.lesson_id,
    }
}

/// The `$set` document applied when overwriting an existing record
fn progress_update(record: &UserProgressDoc) -> Result<Document> {
    Ok(doc! {
        "completed": record.completed,
        "score": match record.score {
            Some(score) => Bson::Int32(score),
            None => Bson::Null,
        },
        "completed_at": bson::to_bson(&record.completed_at)?,
        "metadata.updated_at": bson::DateTime::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn key_uses_the_full_triple() {
        let record = UserProgressDoc::new("u1", "c1", "l1");
        let key = progress_key(&record);
        assert_eq!(key.get_str("user_id").unwrap(), "u1");
        assert_eq!(key.get_str("course_id").unwrap(), "c1");
        assert_eq!(key.get_str("lesson_id").unwrap(), "l1");
        assert_eq!(key.len(), 3);
    }

    #[test]
    fn update_overwrites_mutable_fields_only() {
        let mut record = UserProgressDoc::new("u1", "c1", "l1");
        record.completed = true;
        record.score = Some(80);
        record.completed_at = Some(Utc::now());

        let update = progress_update(&record).unwrap();
        assert!(update.get_bool("completed").unwrap());
        assert_eq!(update.get_i32("score").unwrap(), 80);
        assert!(!update.contains_key("id"));
        assert!(!update.contains_key("user_id"));
    }

    #[test]
    fn cleared_score_is_written_as_null() {
        let record = UserProgressDoc::new("u1", "c1", "l1");
        let update = progress_update(&record).unwrap();
        assert_eq!(update.get("score"), Some(&Bson::Null));
    }

    #[test]
    fn later_write_wins_for_every_mutable_field() {
        let mut first = UserProgressDoc::new("u1", "c1", "l1");
        first.completed = true;
        first.score = Some(80);
        first.completed_at = Some(Utc::now());

        let mut second = UserProgressDoc::new("u1", "c1", "l1");
        second.completed = false;
        second.score = Some(40);
        second.completed_at = None;

        // Apply the two $set documents in order, as the store would
        let mut stored = progress_update(&first).unwrap();
        for (key, value) in progress_update(&second).unwrap() {
            stored.insert(key, value);
        }

        assert!(!stored.get_bool("completed").unwrap());
        assert_eq!(stored.get_i32("score").unwrap(), 40);
        assert_eq!(stored.get("completed_at"), Some(&Bson::Null));
    }

    // Upsert round trips against the unique index require a running MongoDB
    // instance and are covered by the deployment smoke tests.
}
