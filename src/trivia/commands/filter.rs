//! Composable predicates over the question set.
//!
//! Each filter is independent; [`apply`] runs them in sequence over an
//! already-ordered list and keeps that order.

use crate::error::{Result, TriviaError};
use crate::model::{CategoryId, Question, QuestionId};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    Category(CategoryId),
    /// Stored lowercased
    Substring(String),
    Exclude(BTreeSet<QuestionId>),
}

impl QuestionFilter {
    pub fn by_category(category_id: CategoryId) -> Self {
        QuestionFilter::Category(category_id)
    }

    /// Case-insensitive substring match on question text.
    ///
    /// A missing or empty term is rejected rather than matching everything.
    pub fn by_substring(term: Option<&str>) -> Result<Self> {
        match term {
            Some(t) if !t.is_empty() => Ok(QuestionFilter::Substring(t.to_lowercase())),
            _ => Err(TriviaError::Validation(
                "A non-empty search term is required".to_string(),
            )),
        }
    }

    pub fn by_exclusion(ids: impl IntoIterator<Item = QuestionId>) -> Self {
        QuestionFilter::Exclude(ids.into_iter().collect())
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuestionFilter::Category(id) => question.category_id == *id,
            QuestionFilter::Substring(term) => question.text.to_lowercase().contains(term),
            QuestionFilter::Exclude(ids) => !ids.contains(&question.id),
        }
    }
}

pub fn apply(questions: Vec<Question>, filters: &[QuestionFilter]) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| filters.iter().all(|f| f.matches(q)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: QuestionId, category_id: CategoryId, text: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            answer: "a".to_string(),
            difficulty: 1,
            category_id,
        }
    }

    fn seed() -> Vec<Question> {
        vec![
            question(1, 1, "What year?"),
            question(2, 2, "Who wrote it?"),
        ]
    }

    fn ids(questions: &[Question]) -> Vec<QuestionId> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn substring_ignores_case() {
        let filter = QuestionFilter::by_substring(Some("who")).unwrap();
        assert_eq!(ids(&apply(seed(), &[filter])), vec![2]);

        let filter = QuestionFilter::by_substring(Some("YEAR")).unwrap();
        assert_eq!(ids(&apply(seed(), &[filter])), vec![1]);
    }

    #[test]
    fn empty_or_missing_term_is_a_validation_error() {
        assert!(matches!(
            QuestionFilter::by_substring(Some("")),
            Err(TriviaError::Validation(_))
        ));
        assert!(matches!(
            QuestionFilter::by_substring(None),
            Err(TriviaError::Validation(_))
        ));
    }

    #[test]
    fn category_keeps_only_matching_questions() {
        let filtered = apply(seed(), &[QuestionFilter::by_category(2)]);
        assert_eq!(ids(&filtered), vec![2]);
        assert!(apply(seed(), &[QuestionFilter::by_category(9)]).is_empty());
    }

    #[test]
    fn exclusion_removes_listed_ids() {
        let filtered = apply(seed(), &[QuestionFilter::by_exclusion([1])]);
        assert_eq!(ids(&filtered), vec![2]);
        assert_eq!(ids(&apply(seed(), &[QuestionFilter::by_exclusion([])])), vec![1, 2]);
    }

    #[test]
    fn composed_filters_preserve_order() {
        let questions = vec![
            question(1, 1, "Which river?"),
            question(2, 2, "Which mountain?"),
            question(3, 1, "Which lake?"),
            question(4, 1, "How far?"),
        ];
        let filters = [
            QuestionFilter::by_category(1),
            QuestionFilter::by_substring(Some("which")).unwrap(),
            QuestionFilter::by_exclusion([1]),
        ];
        assert_eq!(ids(&apply(questions, &filters)), vec![3]);
    }
}
