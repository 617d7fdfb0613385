use super::filter::{apply, QuestionFilter};
use super::pagination::{validate_page, Page};
use super::QuestionsPayload;
use crate::error::{Result, TriviaError};
use crate::model::CategoryId;
use crate::store::DataStore;
use tracing::debug;

/// Questions belonging to one category, with that category as `current_category`.
pub fn run<S: DataStore>(
    store: &S,
    category_id: CategoryId,
    page: usize,
) -> Result<QuestionsPayload> {
    validate_page(page)?;

    let category = store
        .find_category(category_id)?
        .ok_or_else(|| TriviaError::NotFound(format!("Category {} not found", category_id)))?;

    let questions = apply(
        store.list_questions()?,
        &[QuestionFilter::by_category(category_id)],
    );
    if questions.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "No questions in category {}",
            category_id
        )));
    }

    let page = Page::of(&questions, page);
    debug!(category_id, total = page.total_count, "listed category questions");
    Ok(QuestionsPayload::from_page(page).with_current_category(category))
}
