use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type QuestionId = u32;
pub type CategoryId = u32;

/// Category id meaning "any category" in a quiz round.
pub const ANY_CATEGORY: CategoryId = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    pub difficulty: u8,
    #[serde(rename = "category")]
    pub category_id: CategoryId,
}

/// A question that has passed validation but has no id yet.
/// The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub difficulty: u8,
    pub category_id: CategoryId,
}

impl NewQuestion {
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            difficulty: self.difficulty,
            category_id: self.category_id,
        }
    }
}

/// Raw client input for a create. Every field may be missing; the
/// create command decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default, rename = "question")]
    pub text: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default, rename = "category")]
    pub category_id: Option<i64>,
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category_id: i64,
    ) -> Self {
        Self {
            text: Some(text.into()),
            answer: Some(answer.into()),
            difficulty: Some(difficulty),
            category_id: Some(category_id),
        }
    }
}

/// Per-request quiz state supplied by the client; never persisted.
///
/// `category_id == ANY_CATEGORY` lifts the category restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub category_id: CategoryId,
    pub excluded: BTreeSet<QuestionId>,
}

impl QuizState {
    pub fn new(category_id: CategoryId, excluded: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            category_id,
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn any_category(&self) -> bool {
        self.category_id == ANY_CATEGORY
    }
}
