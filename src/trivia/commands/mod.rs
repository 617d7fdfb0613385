//! # Command Layer
//!
//! One module per operation. Commands take a [`DataStore`] and plain Rust
//! arguments and return one of the payload types below; they never touch
//! stdout, HTTP or the filesystem directly.
//!
//! The payloads are the shape clients see: a `success` flag, the domain
//! fields of the command and, for question listings, `total_questions`
//! counted over the whole filtered set before pagination.
//!
//! [`DataStore`]: crate::store::DataStore

use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, Question, QuestionId};
use crate::store::DataStore;
use pagination::Page;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod by_category;
pub mod categories;
pub mod create;
pub mod delete;
pub mod filter;
pub mod list;
pub mod pagination;
pub mod quiz;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesPayload {
    pub success: bool,
    /// Category id to display label
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionsPayload {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<CategoryId, String>>,
    pub current_category: Option<Category>,
}

impl QuestionsPayload {
    fn from_page(page: Page) -> Self {
        Self {
            success: true,
            questions: page.items,
            total_questions: page.total_count,
            categories: None,
            current_category: None,
        }
    }

    fn with_categories(mut self, categories: BTreeMap<CategoryId, String>) -> Self {
        self.categories = Some(categories);
        self
    }

    fn with_current_category(mut self, category: Category) -> Self {
        self.current_category = Some(category);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPayload {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedPayload {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizPayload {
    pub success: bool,
    pub question: Question,
}

/// Category id → label map; an empty category table is a not-found condition.
pub(crate) fn category_map<S: DataStore>(store: &S) -> Result<BTreeMap<CategoryId, String>> {
    let categories: BTreeMap<_, _> = store
        .list_categories()?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect();

    if categories.is_empty() {
        return Err(TriviaError::NotFound("No categories available".to_string()));
    }
    Ok(categories)
}

/// Re-reads the full question list and slices out `page`; used after a
/// mutation so the caller can re-render the current view.
pub(crate) fn current_page<S: DataStore>(store: &S, page: usize) -> Result<Page> {
    let questions = store.list_questions()?;
    Ok(Page::of(&questions, page))
}
