use super::pagination::validate_page;
use super::{current_page, DeletedPayload};
use crate::error::{Result, TriviaError};
use crate::model::QuestionId;
use crate::store::DataStore;
use tracing::info;

/// Permanently removes a question and returns the recomputed `page`.
pub fn run<S: DataStore>(store: &mut S, id: QuestionId, page: usize) -> Result<DeletedPayload> {
    validate_page(page)?;

    if !store.delete_question(id)? {
        return Err(TriviaError::NotFound(format!("Question {} not found", id)));
    }
    info!(id, "question deleted");

    let page = current_page(store, page)?;
    Ok(DeletedPayload {
        success: true,
        deleted: id,
        questions: page.items,
        total_questions: page.total_count,
    })
}
