//! Read-oriented content service
//!
//! Pure projections of stored documents into response shapes; the only
//! derived computations are the quiz module filter and the recomputed
//! lesson count on course reads (the stored `total_lessons` counter is
//! known to drift and is never trusted).

use bson::{doc, Document};

use crate::db::schemas::{CourseDoc, GlossaryTermDoc, Lesson, QuizQuestionDoc, ToolDoc};
use crate::db::ContentStore;
use crate::types::{ApiError, Result};

/// Read API over courses, quizzes, glossary, and tools
#[derive(Clone)]
pub struct ContentService {
    store: ContentStore,
    fetch_limit: i64,
}

impl ContentService {
    pub fn new(store: ContentStore, fetch_limit: i64) -> Self {
        Self { store, fetch_limit }
    }

    /// List all courses
    pub async fn list_courses(&self) -> Result<Vec<CourseDoc>> {
        let mut courses = self.store.courses.find_many(doc! {}, self.fetch_limit).await?;
        for course in &mut courses {
            normalize_lesson_count(course);
        }
        Ok(courses)
    }

    /// Get a course by id
    pub async fn get_course(&self, course_id: &str) -> Result<CourseDoc> {
        let mut course = self
            .store
            .courses
            .find_one(doc! { "id": course_id })
            .await?
            .ok_or_else(|| ApiError::NotFound("Course".to_string()))?;
        normalize_lesson_count(&mut course);
        Ok(course)
    }

    /// List a course's lessons, ordered by their order index
    pub async fn course_lessons(&self, course_id: &str) -> Result<Vec<Lesson>> {
        let course = self.get_course(course_id).await?;
        let mut lessons = course.lessons;
        lessons.sort_by_key(|l| l.order_index);
        Ok(lessons)
    }

    /// List quiz questions for a course, optionally scoped to one module
    ///
    /// Returns an empty list when nothing matches; never an error.
    pub async fn course_quiz(
        &self,
        course_id: &str,
        module_id: Option<u32>,
    ) -> Result<Vec<QuizQuestionDoc>> {
        let filter = quiz_filter(course_id, module_id);
        self.store.quiz_questions.find_many(filter, self.fetch_limit).await
    }

    /// Get a quiz question by id
    pub async fn quiz_question(&self, question_id: &str) -> Result<QuizQuestionDoc> {
        self.store
            .quiz_questions
            .find_one(doc! { "id": question_id })
            .await?
            .ok_or_else(|| ApiError::NotFound("Question".to_string()))
    }

    /// List all glossary terms
    pub async fn glossary_terms(&self) -> Result<Vec<GlossaryTermDoc>> {
        self.store.glossary.find_many(doc! {}, self.fetch_limit).await
    }

    /// Search glossary by free-text query against term and definition
    ///
    /// Matching happens in-process on the fetched set rather than through
    /// `$regex`, keeping the query string out of the filter document.
    pub async fn search_glossary(&self, query: &str) -> Result<Vec<GlossaryTermDoc>> {
        let terms = self.glossary_terms().await?;
        Ok(terms
            .into_iter()
            .filter(|t| term_matches(t, query))
            .collect())
    }

    /// Get a glossary term by id
    pub async fn glossary_term(&self, term_id: &str) -> Result<GlossaryTermDoc> {
        self.store
            .glossary
            .find_one(doc! { "id": term_id })
            .await?
            .ok_or_else(|| ApiError::NotFound("Glossary term".to_string()))
    }

    /// List all tools
    pub async fn list_tools(&self) -> Result<Vec<ToolDoc>> {
        self.store.tools.find_many(doc! {}, self.fetch_limit).await
    }

    /// Get a tool by id
    pub async fn get_tool(&self, tool_id: &str) -> Result<ToolDoc> {
        self.store
            .tools
            .find_one(doc! { "id": tool_id })
            .await?
            .ok_or_else(|| ApiError::NotFound("Tool".to_string()))
    }
}

/// Recompute `total_lessons` from the embedded lesson array
///
/// Stored documents may carry a drifted declared count; responses always
/// report the actual embedded length.
pub fn normalize_lesson_count(course: &mut CourseDoc) {
    course.total_lessons = course.lessons.len() as u32;
}

/// Build the quiz read filter for a course, optionally scoped to one module
pub fn quiz_filter(course_id: &str, module_id: Option<u32>) -> Document {
    match module_id {
        // Stored as a BSON int; Mongo matches across numeric widths
        Some(module) => doc! { "course_id": course_id, "module_id": module as i64 },
        None => doc! { "course_id": course_id },
    }
}

/// Case-insensitive substring match against term and definition
pub fn term_matches(term: &GlossaryTermDoc, query: &str) -> bool {
    let q = query.to_lowercase();
    term.term.to_lowercase().contains(&q) || term.definition.to_lowercase().contains(&q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schemas::CourseType;

    fn sample_term() -> GlossaryTermDoc {
        GlossaryTermDoc::new(
            "AGI",
            "Adjusted Gross Income - total income minus specific deductions",
            "Tax Terms",
            vec!["Gross Income"],
        )
    }

    #[test]
    fn term_matches_is_case_insensitive_on_term() {
        let term = sample_term();
        assert!(term_matches(&term, "agi"));
        assert!(term_matches(&term, "AGI"));
        assert!(term_matches(&term, "aGi"));
    }

    #[test]
    fn term_matches_searches_definition_substring() {
        let term = sample_term();
        assert!(term_matches(&term, "gross income"));
        assert!(term_matches(&term, "DEDUCTIONS"));
        assert!(!term_matches(&term, "depreciation"));
    }

    #[test]
    fn quiz_filter_scopes_to_module_when_present() {
        let filter = quiz_filter("course-1", Some(4));
        assert_eq!(filter.get_str("course_id").unwrap(), "course-1");
        assert_eq!(filter.get_i64("module_id").unwrap(), 4);

        let filter = quiz_filter("course-1", None);
        assert!(!filter.contains_key("module_id"));
    }

    #[test]
    fn lesson_count_is_recomputed_from_embedded_array() {
        let mut course = CourseDoc::new(
            CourseType::W2,
            "W-2 Escape Plan",
            "d",
            "thumb",
            false,
            8, // declared count drifted from the actual two lessons
            4,
            vec![
                Lesson::new("One", "d", "c", 40, 1),
                Lesson::new("Two", "d", "c", 45, 2),
            ],
        );
        normalize_lesson_count(&mut course);
        assert_eq!(course.total_lessons, 2);
    }
}
