//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for the question bank, whichever client is driving it: the HTTP
//! server and the CLI both hold a [`TriviaApi`] and nothing else.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each of the seven commands to its module
//! - **Owns** the store and the random source the quiz draws from
//! - **Returns structured types** (payload structs, never strings)
//!
//! ## Generic Over DataStore and Rng
//!
//! `TriviaApi<S: DataStore, R: Rng>`:
//! - Production: `TriviaApi<FileStore, StdRng>` seeded from entropy or config
//! - Testing: `TriviaApi<InMemoryStore, StdRng>` seeded with a fixed value
//!
//! Business rules (validation, not-found policy, paging) live in
//! `commands/*.rs`; tests here only check dispatch.

use crate::commands::{
    self, CategoriesPayload, CreatedPayload, DeletedPayload, QuestionsPayload, QuizPayload,
};
use crate::error::Result;
use crate::model::{CategoryId, QuestionDraft, QuestionId, QuizState};
use crate::store::DataStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct TriviaApi<S: DataStore, R: Rng = StdRng> {
    store: S,
    rng: R,
}

impl<S: DataStore> TriviaApi<S, StdRng> {
    /// Builds an API whose quiz picks are reproducible when `seed` is given.
    pub fn with_seed(store: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(store, rng)
    }
}

impl<S: DataStore, R: Rng> TriviaApi<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    pub fn list_categories(&self) -> Result<CategoriesPayload> {
        commands::categories::run(&self.store)
    }

    pub fn list_questions(&self, page: usize) -> Result<QuestionsPayload> {
        commands::list::run(&self.store, page)
    }

    pub fn delete_question(&mut self, id: QuestionId, page: usize) -> Result<DeletedPayload> {
        commands::delete::run(&mut self.store, id, page)
    }

    pub fn create_question(&mut self, draft: QuestionDraft, page: usize) -> Result<CreatedPayload> {
        commands::create::run(&mut self.store, draft, page)
    }

    pub fn search_questions(&self, term: Option<&str>, page: usize) -> Result<QuestionsPayload> {
        commands::search::run(&self.store, term, page)
    }

    pub fn category_questions(
        &self,
        category_id: CategoryId,
        page: usize,
    ) -> Result<QuestionsPayload> {
        commands::by_category::run(&self.store, category_id, page)
    }

    pub fn next_quiz_question(&mut self, state: &QuizState) -> Result<QuizPayload> {
        commands::quiz::run(&self.store, &mut self.rng, state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
