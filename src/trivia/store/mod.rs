//! # Storage Layer
//!
//! This module defines the storage abstraction for the question bank. The
//! [`DataStore`] trait is the only way the command layer reaches persisted
//! data: it hands out plain records and never a live handle back into storage.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Categories, questions and the id counter live in one JSON data file
//!   - Writes go to a temporary sibling which is then renamed over the data
//!     file, so a mutation is either fully visible or not at all
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering
//!
//! Both listing methods return records in ascending id order. Commands rely on
//! this as the base ordering for pagination.
//!
//! ## Ids
//!
//! Question ids are assigned by the store and never reused: the counter only
//! moves forward, even when the newest question is deleted.

use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

pub mod fs;
pub mod memory;

/// The categories a freshly initialised data file starts with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// The id after `current`, or a store error once the id space is used up.
pub(crate) fn next_question_id(current: QuestionId) -> Result<QuestionId> {
    current
        .checked_add(1)
        .ok_or_else(|| TriviaError::Store(format!("Question ids exhausted at {}", current)))
}

/// Abstract interface for question and category storage.
pub trait DataStore {
    /// All categories, ascending by id
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// All questions, ascending by id
    fn list_questions(&self) -> Result<Vec<Question>>;

    /// Look up a single category
    fn find_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// Insert a question, assigning it a fresh id
    fn insert_question(&mut self, question: NewQuestion) -> Result<Question>;

    /// Delete a question permanently. Returns `false` when no row matched.
    fn delete_question(&mut self, id: QuestionId) -> Result<bool>;
}

impl<S: DataStore + ?Sized> DataStore for Box<S> {
    fn list_categories(&self) -> Result<Vec<Category>> {
        (**self).list_categories()
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        (**self).list_questions()
    }

    fn find_category(&self, id: CategoryId) -> Result<Option<Category>> {
        (**self).find_category(id)
    }

    fn insert_question(&mut self, question: NewQuestion) -> Result<Question> {
        (**self).insert_question(question)
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        (**self).delete_question(id)
    }
}
