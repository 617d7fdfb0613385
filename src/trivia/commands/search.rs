use super::filter::{apply, QuestionFilter};
use super::pagination::{validate_page, Page};
use super::QuestionsPayload;
use crate::error::{Result, TriviaError};
use crate::store::DataStore;
use tracing::debug;

/// Questions whose text contains `term`, ignoring case.
pub fn run<S: DataStore>(store: &S, term: Option<&str>, page: usize) -> Result<QuestionsPayload> {
    let filter = QuestionFilter::by_substring(term)?;
    validate_page(page)?;

    let matches = apply(store.list_questions()?, &[filter]);
    if matches.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "No questions match \"{}\"",
            term.unwrap_or_default()
        )));
    }

    let page = Page::of(&matches, page);
    debug!(term = term.unwrap_or_default(), total = page.total_count, "searched questions");
    Ok(QuestionsPayload::from_page(page))
}
