use super::pagination::{validate_page, Page};
use super::{category_map, QuestionsPayload};
use crate::error::{Result, TriviaError};
use crate::store::DataStore;
use tracing::debug;

/// All questions, one page at a time, along with the category map.
pub fn run<S: DataStore>(store: &S, page: usize) -> Result<QuestionsPayload> {
    validate_page(page)?;

    let questions = store.list_questions()?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound("No questions available".to_string()));
    }

    let page = Page::of(&questions, page);
    let categories = category_map(store)?;
    debug!(
        page = page.page_number,
        shown = page.items.len(),
        total = page.total_count,
        "listed questions"
    );

    Ok(QuestionsPayload::from_page(page).with_categories(categories))
}
