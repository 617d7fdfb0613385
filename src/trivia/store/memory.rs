use super::{next_question_id, DataStore};
use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a category. Categories are read-only to the command layer, so
    /// this lives on the concrete store rather than the trait.
    pub fn add_category(&mut self, category: Category) {
        self.categories.insert(category.id, category);
    }

    /// Seed a question with a caller-chosen id, bumping the id counter past it.
    pub fn put_question(&mut self, question: Question) {
        self.next_id = self.next_id.max(question.id.saturating_add(1));
        self.questions.insert(question.id, question);
    }
}

impl DataStore for InMemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn find_category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn insert_question(&mut self, question: NewQuestion) -> Result<Question> {
        let id = self.next_id;
        if self.questions.contains_key(&id) {
            return Err(TriviaError::Store(format!("Question id {} already taken", id)));
        }
        self.next_id = next_question_id(id)?;
        let question = question.into_question(id);
        self.questions.insert(id, question.clone());
        Ok(question)
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        Ok(self.questions.remove(&id).is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::DEFAULT_CATEGORIES;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds the six default categories with ids 1..=6.
        pub fn with_default_categories(mut self) -> Self {
            for (i, name) in DEFAULT_CATEGORIES.iter().enumerate() {
                self.store.add_category(Category::new(i as CategoryId + 1, *name));
            }
            self
        }

        pub fn with_category(mut self, id: CategoryId, kind: &str) -> Self {
            self.store.add_category(Category::new(id, kind));
            self
        }

        pub fn with_question(mut self, id: QuestionId, category_id: CategoryId, text: &str) -> Self {
            self.store.put_question(Question {
                id,
                text: text.to_string(),
                answer: format!("Answer {}", id),
                difficulty: 1,
                category_id,
            });
            self
        }

        /// Seeds `count` questions with ids continuing from the current counter.
        pub fn with_questions(mut self, count: usize, category_id: CategoryId) -> Self {
            for i in 0..count {
                self.store
                    .insert_question(NewQuestion {
                        text: format!("Test question {}", i + 1),
                        answer: format!("Test answer {}", i + 1),
                        difficulty: 1 + (i % 5) as u8,
                        category_id,
                    })
                    .unwrap();
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
