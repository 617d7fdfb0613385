//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API. Field names follow the wire
//! format clients already speak (`searchTerm`, `quiz_category`, ...).

use crate::model::{CategoryId, QuestionId, QuizState};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// `?page=N` query string.
///
/// Non-numeric values fall back to the first page; zero and negative values
/// are passed on as page 0 so the command layer rejects them. Numbers too
/// large to represent saturate, landing past the last page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        let Some(raw) = self.page.as_deref() else {
            return 1;
        };
        match raw.trim().parse::<i64>() {
            Ok(n) => usize::try_from(n).unwrap_or(0),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => usize::MAX,
                IntErrorKind::NegOverflow => 0,
                _ => 1,
            },
        }
    }
}

/// Search request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Category ids arrive as numbers from most clients and as strings from some.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl IdValue {
    pub fn as_category_id(&self) -> Option<CategoryId> {
        match self {
            IdValue::Number(n) => CategoryId::try_from(*n).ok(),
            IdValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: IdValue,
}

/// Quiz request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl QuizRequest {
    /// The per-request quiz state, or `None` when the category is missing or
    /// not a valid id.
    pub fn into_state(self) -> Option<QuizState> {
        let category_id = self.quiz_category?.id.as_category_id()?;
        Some(QuizState::new(
            category_id,
            self.previous_questions.unwrap_or_default(),
        ))
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
    /// What went wrong, beyond the status text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            success: false,
            error: status,
            message: message.into(),
            detail,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ANY_CATEGORY;

    fn page(raw: Option<&str>) -> usize {
        PageQuery {
            page: raw.map(str::to_string),
        }
        .page()
    }

    #[test]
    fn page_query_defaults_and_rejections() {
        assert_eq!(page(None), 1);
        assert_eq!(page(Some("3")), 3);
        assert_eq!(page(Some("abc")), 1);
        assert_eq!(page(Some("0")), 0);
        assert_eq!(page(Some("-2")), 0);
        assert_eq!(page(Some("99999999999999999999")), usize::MAX);
        assert_eq!(page(Some("-99999999999999999999")), 0);
        assert_eq!(page(Some("")), 1);
    }

    #[test]
    fn quiz_request_accepts_numeric_and_string_ids() {
        let body: QuizRequest = serde_json::from_str(
            r#"{"quiz_category": {"id": 3, "type": "Geography"}, "previous_questions": [4, 9]}"#,
        )
        .unwrap();
        let state = body.into_state().unwrap();
        assert_eq!(state.category_id, 3);
        assert_eq!(state.excluded.iter().copied().collect::<Vec<_>>(), vec![4, 9]);

        let body: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"id": "0"}}"#).unwrap();
        let state = body.into_state().unwrap();
        assert_eq!(state.category_id, ANY_CATEGORY);
        assert!(state.excluded.is_empty());
    }

    #[test]
    fn quiz_request_without_category_has_no_state() {
        let body: QuizRequest = serde_json::from_str(r#"{"previous_questions": []}"#).unwrap();
        assert!(body.into_state().is_none());

        let body: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"id": "history"}}"#).unwrap();
        assert!(body.into_state().is_none());
    }
}
