use super::pagination::validate_page;
use super::{current_page, CreatedPayload};
use crate::error::{Result, TriviaError};
use crate::model::{CategoryId, NewQuestion, QuestionDraft};
use crate::store::DataStore;
use tracing::info;

/// Validates `draft`, inserts it, and returns the new id together with the
/// recomputed `page` of all questions.
pub fn run<S: DataStore>(store: &mut S, draft: QuestionDraft, page: usize) -> Result<CreatedPayload> {
    validate_page(page)?;
    let question = validate(store, draft)?;

    let created = store.insert_question(question)?;
    info!(id = created.id, category_id = created.category_id, "question created");

    let page = current_page(store, page)?;
    Ok(CreatedPayload {
        success: true,
        created: created.id,
        questions: page.items,
        total_questions: page.total_count,
    })
}

fn validate<S: DataStore>(store: &S, draft: QuestionDraft) -> Result<NewQuestion> {
    let missing: Vec<&str> = [
        ("question", draft.text.is_none()),
        ("answer", draft.answer.is_none()),
        ("difficulty", draft.difficulty.is_none()),
        ("category", draft.category_id.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    let (Some(text), Some(answer), Some(difficulty), Some(category)) =
        (draft.text, draft.answer, draft.difficulty, draft.category_id)
    else {
        return Err(TriviaError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    if text.trim().is_empty() {
        return Err(TriviaError::Validation("Question text cannot be empty".into()));
    }
    if answer.trim().is_empty() {
        return Err(TriviaError::Validation("Answer cannot be empty".into()));
    }

    let difficulty = u8::try_from(difficulty)
        .ok()
        .filter(|d| *d >= 1)
        .ok_or_else(|| {
            TriviaError::Validation(format!(
                "Difficulty must be a positive integer up to {}, got {}",
                u8::MAX,
                difficulty
            ))
        })?;

    let category_id = CategoryId::try_from(category)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| TriviaError::Validation(format!("Invalid category id {}", category)))?;
    if store.find_category(category_id)?.is_none() {
        return Err(TriviaError::Validation(format!(
            "Unknown category {}",
            category_id
        )));
    }

    Ok(NewQuestion {
        text,
        answer,
        difficulty,
        category_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        StoreFixture::new().with_default_categories().build()
    }

    #[test]
    fn created_question_is_listed_exactly_once() {
        let mut store = StoreFixture::new()
            .with_default_categories()
            .with_questions(3, 2)
            .build();

        let draft = QuestionDraft::new("What is Rust?", "A language", 2, 1);
        let result = run(&mut store, draft, 1).unwrap();
        assert!(result.success);
        assert_eq!(result.total_questions, 4);

        let listed = list::run(&store, 1).unwrap();
        let matching: Vec<_> = listed
            .questions
            .iter()
            .filter(|q| q.id == result.created)
            .collect();
        assert_eq!(matching.len(), 1);
        let q = matching[0];
        assert_eq!(q.text, "What is Rust?");
        assert_eq!(q.answer, "A language");
        assert_eq!(q.difficulty, 2);
        assert_eq!(q.category_id, 1);
        assert!(listed.questions.iter().filter(|o| o.id != q.id).all(|o| o.id < q.id));
    }

    #[test]
    fn missing_question_text_is_a_validation_error() {
        let mut store = store();
        let draft = QuestionDraft {
            text: None,
            ..QuestionDraft::new("", "A", 1, 1)
        };

        let err = run(&mut store, draft, 1).unwrap_err();
        assert!(matches!(err, TriviaError::Validation(ref m) if m.contains("question")));
        assert!(store.list_questions().unwrap().is_empty());
    }

    #[test]
    fn reports_every_missing_field() {
        let mut store = store();
        let draft = QuestionDraft {
            text: Some("What is Python?".into()),
            ..QuestionDraft::default()
        };

        match run(&mut store, draft, 1) {
            Err(TriviaError::Validation(msg)) => {
                assert!(msg.contains("answer"));
                assert!(msg.contains("difficulty"));
                assert!(msg.contains("category"));
                assert!(!msg.contains("question,"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let mut store = store();
        for difficulty in [0, -1, 256] {
            let draft = QuestionDraft::new("Q", "A", difficulty, 1);
            assert!(matches!(
                run(&mut store, draft, 1),
                Err(TriviaError::Validation(_))
            ));
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let mut store = store();
        let draft = QuestionDraft::new("Q", "A", 1, 42);
        assert!(matches!(
            run(&mut store, draft, 1),
            Err(TriviaError::Validation(_))
        ));
    }

    #[test]
    fn rejects_blank_text() {
        let mut store = store();
        let draft = QuestionDraft::new("   ", "A", 1, 1);
        assert!(matches!(
            run(&mut store, draft, 1),
            Err(TriviaError::Validation(_))
        ));
    }

    #[test]
    fn returns_the_requested_page() {
        let mut store = StoreFixture::new()
            .with_default_categories()
            .with_questions(10, 1)
            .build();

        let result = run(&mut store, QuestionDraft::new("Q", "A", 1, 1), 2).unwrap();
        assert_eq!(result.total_questions, 11);
        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].id, result.created);
    }
}
