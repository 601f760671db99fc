//! Typed handles to every collection the service uses
//!
//! Constructed once at startup and cloned into services; the underlying
//! MongoDB client is long-lived and shared across requests.

use crate::db::mongo::{MongoClient, MongoCollection};
use crate::db::schemas::{
    CourseDoc, GlossaryTermDoc, QuizQuestionDoc, ToolDoc, UserProgressDoc, UserXpDoc,
    COURSE_COLLECTION, GLOSSARY_COLLECTION, QUIZ_QUESTION_COLLECTION, TOOL_COLLECTION,
    USER_PROGRESS_COLLECTION, USER_XP_COLLECTION,
};
use crate::types::Result;

/// All collections of the content store, index-applied and ready to use
#[derive(Clone)]
pub struct ContentStore {
    pub courses: MongoCollection<CourseDoc>,
    pub quiz_questions: MongoCollection<QuizQuestionDoc>,
    pub glossary: MongoCollection<GlossaryTermDoc>,
    pub tools: MongoCollection<ToolDoc>,
    pub progress: MongoCollection<UserProgressDoc>,
    pub xp: MongoCollection<UserXpDoc>,
}

impl ContentStore {
    /// Open (and index) every collection
    pub async fn init(mongo: &MongoClient) -> Result<Self> {
        Ok(Self {
            courses: mongo.collection(COURSE_COLLECTION).await?,
            quiz_questions: mongo.collection(QUIZ_QUESTION_COLLECTION).await?,
            glossary: mongo.collection(GLOSSARY_COLLECTION).await?,
            tools: mongo.collection(TOOL_COLLECTION).await?,
            progress: mongo.collection(USER_PROGRESS_COLLECTION).await?,
            xp: mongo.collection(USER_XP_COLLECTION).await?,
        })
    }
}
