//! Quiz round selection.
//!
//! The random source is a parameter so rounds can be replayed from a seed.

use super::filter::{apply, QuestionFilter};
use super::QuizPayload;
use crate::error::{Result, TriviaError};
use crate::model::{Question, QuizState};
use crate::store::DataStore;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Picks a question uniformly at random among those eligible for `state`.
///
/// Eligible means not excluded and, unless the state asks for any category,
/// in the requested category. Returns `None` when nothing is eligible.
pub fn next_question<R: Rng + ?Sized>(
    questions: Vec<Question>,
    state: &QuizState,
    rng: &mut R,
) -> Option<Question> {
    let mut filters = vec![QuestionFilter::by_exclusion(state.excluded.iter().copied())];
    if !state.any_category() {
        filters.push(QuestionFilter::by_category(state.category_id));
    }

    let candidates = apply(questions, &filters);
    debug!(
        category_id = state.category_id,
        excluded = state.excluded.len(),
        candidates = candidates.len(),
        "selecting quiz question"
    );
    candidates.choose(rng).cloned()
}

pub fn run<S: DataStore, R: Rng + ?Sized>(
    store: &S,
    rng: &mut R,
    state: &QuizState,
) -> Result<QuizPayload> {
    let question = next_question(store.list_questions()?, state, rng).ok_or_else(|| {
        TriviaError::NotFound(format!(
            "No questions left in category {}",
            state.category_id
        ))
    })?;

    Ok(QuizPayload {
        success: true,
        question,
    })
}
