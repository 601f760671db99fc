//! Stateless quiz grading
//!
//! Correctness is decided explicitly per question type:
//!
//! - `multiple_choice` and `scenario`: case-insensitive equality between the
//!   submission and the stored correct answer (option text).
//! - `true_false`: the stored answer is the canonical "True"/"False" string;
//!   submissions are accepted in any casing.
//!
//! No partial credit and no fuzzy matching; a correct answer is worth the
//! question's full point value, anything else is worth zero.

use serde::Serialize;

use crate::db::schemas::{QuizQuestionDoc, QuizQuestionType};

/// Grading outcome returned to the client
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GradeResult {
    pub correct: bool,
    pub points: u32,
    pub explanation: String,
}

/// Grade a submitted answer against a stored question
pub fn grade(question: &QuizQuestionDoc, answer: &str) -> GradeResult {
    let correct = match question.question_type {
        QuizQuestionType::MultipleChoice | QuizQuestionType::Scenario => {
            answers_equal(answer, &question.correct_answer)
        }
        // Canonical stored form is "True"/"False"; any submitted casing counts
        QuizQuestionType::TrueFalse => answers_equal(answer, &question.correct_answer),
    };

    GradeResult {
        correct,
        points: if correct { question.points } else { 0 },
        explanation: question.explanation.clone(),
    }
}

/// Case-insensitive answer comparison
fn answers_equal(submitted: &str, expected: &str) -> bool {
    submitted.to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: QuizQuestionType, correct: &str, options: Vec<&str>) -> QuizQuestionDoc {
        QuizQuestionDoc::new(
            "What's the biggest weakness of a traditional CPA?",
            question_type,
            options,
            correct,
            "CPAs file; strategists plan.",
            "course-1",
            1,
        )
    }

    #[test]
    fn exact_answer_earns_full_points() {
        let q = question(
            QuizQuestionType::MultipleChoice,
            "They focus on filing, not planning",
            vec!["They cost too much", "They focus on filing, not planning"],
        );
        let result = grade(&q, "They focus on filing, not planning");
        assert!(result.correct);
        assert_eq!(result.points, q.points);
        assert_eq!(result.explanation, q.explanation);
    }

    #[test]
    fn casing_does_not_matter() {
        let q = question(
            QuizQuestionType::MultipleChoice,
            "They focus on filing, not planning",
            vec!["They cost too much", "They focus on filing, not planning"],
        );
        assert!(grade(&q, "THEY FOCUS ON FILING, NOT PLANNING").correct);
        assert!(grade(&q, "they focus on filing, not planning").correct);
    }

    #[test]
    fn wrong_answer_earns_zero() {
        let q = question(
            QuizQuestionType::MultipleChoice,
            "They focus on filing, not planning",
            vec!["They cost too much", "They focus on filing, not planning"],
        );
        let result = grade(&q, "They cost too much");
        assert!(!result.correct);
        assert_eq!(result.points, 0);
        // Explanation is returned either way
        assert_eq!(result.explanation, q.explanation);
    }

    #[test]
    fn true_false_accepts_any_casing() {
        let q = question(QuizQuestionType::TrueFalse, "True", vec!["True", "False"]);
        assert!(grade(&q, "true").correct);
        assert!(grade(&q, "TRUE").correct);
        assert!(!grade(&q, "false").correct);
        assert!(!grade(&q, "yes").correct);
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        // Submissions are compared as sent; clients send the option text
        let q = question(QuizQuestionType::TrueFalse, "True", vec!["True", "False"]);
        assert!(!grade(&q, " true ").correct);
        assert!(!grade(&q, "true\n").correct);
    }

    #[test]
    fn scenario_uses_exact_text_match() {
        let q = question(
            QuizQuestionType::Scenario,
            "Elect S-Corp status",
            vec!["Stay a sole proprietor", "Elect S-Corp status"],
        );
        assert!(grade(&q, "elect s-corp status").correct);
        assert!(!grade(&q, "Elect C-Corp status").correct);
    }
}
