//! The fixed sample content set
//!
//! Three courses (one free primer, two paid tracks) with embedded lessons,
//! quiz questions keyed by course and module, glossary terms, and tools.
//! The declared `total_lessons` values intentionally reflect the full
//! planned curriculum and exceed the seeded lesson arrays for the paid
//! tracks; course reads recompute the count from the embedded array.

use bson::doc;

use crate::db::schemas::{
    CourseDoc, CourseType, GlossaryTermDoc, Lesson, QuizQuestionDoc, QuizQuestionType, ToolDoc,
    ToolType,
};

/// The three seed courses with their embedded lessons
pub fn sample_courses() -> Vec<CourseDoc> {
    let primer = CourseDoc::new(
        CourseType::Primer,
        "The Escape Blueprint",
        "Essential fundamentals to understand your tax situation and escape IRS problems",
        "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400",
        true,
        5,
        2,
        vec![
            Lesson::new(
                "Understanding Your Tax Burden",
                "Learn the basics of tax liability and common IRS issues",
                "This lesson covers the fundamental concepts of tax burden, including how taxes \
                 are calculated, common mistakes that lead to IRS problems, and the first steps \
                 to take when facing tax issues.",
                25,
                1,
            ),
            Lesson::new(
                "IRS Communication Basics",
                "How to interpret and respond to IRS notices",
                "Understanding IRS letters and notices is crucial. This lesson teaches you how \
                 to read IRS correspondence, identify urgent vs. routine notices, and respond \
                 appropriately.",
                30,
                2,
            ),
            Lesson::new(
                "Payment Options Overview",
                "Explore different ways to resolve tax debt",
                "The IRS offers several payment options including payment plans, offers in \
                 compromise, and currently not collectible status. Learn which option might \
                 work for your situation.",
                35,
                3,
            ),
            Lesson::new(
                "Professional Help: When and How",
                "Understanding when to seek professional assistance",
                "Some tax situations require professional help. Learn when to contact a tax \
                 professional, what credentials to look for, and how to work effectively with \
                 tax representatives.",
                20,
                4,
            ),
            Lesson::new(
                "Creating Your Action Plan",
                "Develop a personalized strategy for your tax situation",
                "Put everything together to create a step-by-step action plan tailored to your \
                 specific tax situation and goals.",
                30,
                5,
            ),
        ],
    );

    let w2 = CourseDoc::new(
        CourseType::W2,
        "W-2 Escape Plan",
        "Advanced strategies for W-2 employees to minimize taxes and resolve IRS issues",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
        false,
        8,
        4,
        vec![
            Lesson::new(
                "W-2 Employee Tax Basics",
                "Understanding payroll taxes and withholdings",
                "Deep dive into how payroll taxes work, understanding your pay stub, and \
                 optimizing your withholdings.",
                40,
                1,
            ),
            Lesson::new(
                "Maximizing Deductions",
                "Employee-specific deductions and strategies",
                "Learn about deductions available to W-2 employees, including unreimbursed \
                 business expenses, home office deductions for remote work, and more.",
                45,
                2,
            ),
        ],
    );

    let business = CourseDoc::new(
        CourseType::Business,
        "Business Owner Tax Freedom",
        "Comprehensive tax strategies for business owners and entrepreneurs",
        "https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=400",
        false,
        12,
        6,
        vec![
            Lesson::new(
                "Business Structure Tax Implications",
                "Choosing the right business structure for tax benefits",
                "Compare sole proprietorship, LLC, S-Corp, and C-Corp structures and their \
                 tax implications.",
                50,
                1,
            ),
            Lesson::new(
                "Business Deduction Strategies",
                "Maximizing legitimate business deductions",
                "Learn about all available business deductions including equipment, travel, \
                 meals, and home office expenses.",
                55,
                2,
            ),
        ],
    );

    vec![primer, w2, business]
}

/// Quiz questions keyed by course and module
///
/// Courses are matched by type so question ownership survives the UUIDs
/// being regenerated on every reseed.
pub fn sample_quiz_questions(courses: &[CourseDoc]) -> Vec<QuizQuestionDoc> {
    fn course_id(courses: &[CourseDoc], course_type: CourseType) -> &str {
        courses
            .iter()
            .find(|c| c.course_type == course_type)
            .map(|c| c.id.as_str())
            .unwrap_or_default()
    }

    let primer_id = course_id(courses, CourseType::Primer);
    let w2_id = course_id(courses, CourseType::W2);
    let business_id = course_id(courses, CourseType::Business);

    vec![
        QuizQuestionDoc::new(
            "What's the biggest weakness of a traditional CPA?",
            QuizQuestionType::MultipleChoice,
            vec![
                "They cost too much",
                "They focus on filing, not planning",
                "They only work during tax season",
                "They can't communicate with the IRS",
            ],
            "They focus on filing, not planning",
            "Most CPAs are trained to report what already happened. Reducing what you owe \
             requires forward-looking planning before the tax year closes.",
            primer_id,
            1,
        ),
        QuizQuestionDoc::new(
            "What is the first step when you receive an IRS notice?",
            QuizQuestionType::MultipleChoice,
            vec![
                "Ignore it",
                "Read it carefully",
                "Call a lawyer immediately",
                "Throw it away",
            ],
            "Read it carefully",
            "Always read IRS notices carefully to understand what action is required and any \
             deadlines.",
            primer_id,
            2,
        ),
        QuizQuestionDoc::new(
            "Payment plans with the IRS require a setup fee.",
            QuizQuestionType::TrueFalse,
            vec!["True", "False"],
            "True",
            "The IRS charges a setup fee for payment plans, though it may be reduced for \
             low-income taxpayers.",
            primer_id,
            3,
        ),
        QuizQuestionDoc::new(
            "Which document determines how much tax is withheld from each paycheck?",
            QuizQuestionType::MultipleChoice,
            vec!["Form W-4", "Form W-2", "Form 1099", "Schedule C"],
            "Form W-4",
            "The W-4 you file with your employer sets your withholding; the W-2 only reports \
             what was withheld after the fact.",
            w2_id,
            1,
        ),
        QuizQuestionDoc::new(
            "You run a profitable LLC taxed as a sole proprietorship and want to reduce \
             self-employment tax. What is the most common first structural move?",
            QuizQuestionType::Scenario,
            vec![
                "Elect S-Corp status",
                "Form a C-Corp immediately",
                "Stop taking owner draws",
                "Move the business offshore",
            ],
            "Elect S-Corp status",
            "An S-Corp election lets the owner split income between a reasonable salary and \
             distributions, with only the salary subject to employment taxes.",
            business_id,
            1,
        ),
    ]
}

/// Glossary terms across tax and IRS-program categories
pub fn sample_glossary_terms() -> Vec<GlossaryTermDoc> {
    vec![
        GlossaryTermDoc::new(
            "AGI",
            "Adjusted Gross Income - Your total income minus specific deductions allowed by \
             the IRS",
            "Tax Terms",
            vec!["Gross Income", "Deductions", "Tax Liability"],
        ),
        GlossaryTermDoc::new(
            "Offer in Compromise",
            "An agreement with the IRS that settles your tax debt for less than the full \
             amount you owe",
            "IRS Programs",
            vec!["Payment Plan", "Currently Not Collectible", "Tax Debt"],
        ),
        GlossaryTermDoc::new(
            "Currently Not Collectible",
            "IRS status that temporarily delays collection due to financial hardship",
            "IRS Programs",
            vec!["Offer in Compromise", "Payment Plan", "Financial Hardship"],
        ),
        GlossaryTermDoc::new(
            "Tax Planning",
            "Structuring income, deductions, and entities before year-end to legally reduce \
             future tax liability",
            "Tax Terms",
            vec!["AGI", "Deductions"],
        ),
        GlossaryTermDoc::new(
            "W-2 Income",
            "Wages reported by an employer, with income and payroll taxes withheld at the \
             source",
            "Tax Terms",
            vec!["AGI", "Tax Planning"],
        ),
        GlossaryTermDoc::new(
            "Short-Term Rental (STR)",
            "A property rented for an average stay of 7 days or less, qualifying for \
             different tax treatment under IRC \u{00a7}469 and Treas. Reg. \
             \u{00a7}1.469-1T(e)(3)",
            "Real Estate",
            vec!["Tax Planning", "Depreciation"],
        ),
    ]
}

/// Interactive tools (calculators and form generators)
pub fn sample_tools() -> Vec<ToolDoc> {
    vec![
        ToolDoc::new(
            "Tax Liability Calculator",
            "Calculate your estimated tax liability based on income and deductions",
            ToolType::Calculator,
            "calculator",
            true,
            doc! { "fields": ["income", "deductions", "filing_status"] },
        ),
        ToolDoc::new(
            "Payment Plan Estimator",
            "Estimate monthly payments for IRS payment plans",
            ToolType::Calculator,
            "credit-card",
            true,
            doc! { "fields": ["total_debt", "plan_length", "income"] },
        ),
        ToolDoc::new(
            "Offer in Compromise Qualifier",
            "Determine if you might qualify for an Offer in Compromise",
            ToolType::FormGenerator,
            "file-text",
            false,
            doc! { "fields": ["assets", "income", "expenses", "debt_amount"] },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_exactly_three_courses_one_per_track() {
        let courses = sample_courses();
        assert_eq!(courses.len(), 3);
        let types: HashSet<_> = courses
            .iter()
            .map(|c| serde_json::to_string(&c.course_type).unwrap())
            .collect();
        assert!(types.contains("\"primer\""));
        assert!(types.contains("\"w2\""));
        assert!(types.contains("\"business\""));
    }

    #[test]
    fn only_the_primer_is_free() {
        let courses = sample_courses();
        for course in &courses {
            assert_eq!(course.is_free, course.course_type == CourseType::Primer);
        }
    }

    #[test]
    fn lesson_order_indices_are_contiguous_from_one() {
        for course in sample_courses() {
            let mut indices: Vec<u32> = course.lessons.iter().map(|l| l.order_index).collect();
            indices.sort_unstable();
            let expected: Vec<u32> = (1..=course.lessons.len() as u32).collect();
            assert_eq!(indices, expected, "course '{}' has gapped modules", course.title);
        }
    }

    #[test]
    fn all_seed_ids_are_unique() {
        let courses = sample_courses();
        let mut ids = HashSet::new();
        for course in &courses {
            assert!(ids.insert(course.id.clone()));
            for lesson in &course.lessons {
                assert!(ids.insert(lesson.id.clone()));
            }
        }
        for q in sample_quiz_questions(&courses) {
            assert!(ids.insert(q.id));
        }
        for t in sample_glossary_terms() {
            assert!(ids.insert(t.id));
        }
        for t in sample_tools() {
            assert!(ids.insert(t.id));
        }
    }

    #[test]
    fn multiple_choice_answers_are_always_an_option() {
        let courses = sample_courses();
        for q in sample_quiz_questions(&courses) {
            if q.question_type == QuizQuestionType::MultipleChoice {
                assert!(
                    q.options.contains(&q.correct_answer),
                    "question '{}' cannot be answered correctly",
                    q.question
                );
            }
        }
    }

    #[test]
    fn every_question_belongs_to_a_seeded_course_and_module() {
        let courses = sample_courses();
        for q in sample_quiz_questions(&courses) {
            let course = courses
                .iter()
                .find(|c| c.id == q.course_id)
                .expect("question references an unseeded course");
            assert!(
                course.lessons.iter().any(|l| l.order_index == q.module_id),
                "question '{}' references module {} which has no lesson",
                q.question,
                q.module_id
            );
        }
    }

    #[test]
    fn primer_module_one_asks_about_traditional_cpas() {
        let courses = sample_courses();
        let primer = courses
            .iter()
            .find(|c| c.course_type == CourseType::Primer)
            .unwrap();
        let questions = sample_quiz_questions(&courses);
        let module_one: Vec<_> = questions
            .iter()
            .filter(|q| q.course_id == primer.id && q.module_id == 1)
            .collect();

        assert_eq!(module_one.len(), 1);
        let q = module_one[0];
        assert_eq!(q.question, "What's the biggest weakness of a traditional CPA?");
        assert_eq!(q.correct_answer, "They focus on filing, not planning");
        assert_eq!(q.points, 10);
    }

    #[test]
    fn glossary_and_tools_are_non_empty() {
        assert!(!sample_glossary_terms().is_empty());
        assert_eq!(sample_tools().len(), 3);
    }
}
