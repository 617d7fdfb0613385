//! HTTP API Request Handlers
//!
//! Each handler extracts its inputs, takes the API lock for one synchronous
//! command, and turns the outcome into JSON.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;
use tracing::{error, warn};

use super::types::{ErrorResponse, HealthResponse, PageQuery, QuizRequest, SearchRequest};
use crate::api::TriviaApi;
use crate::commands::{
    CategoriesPayload, CreatedPayload, DeletedPayload, QuestionsPayload, QuizPayload,
};
use crate::error::{ErrorKind, TriviaError};
use crate::model::{CategoryId, QuestionDraft, QuestionId};
use crate::store::DataStore;

/// The API as the server holds it: any store, one lock.
pub type SharedApi = Arc<Mutex<TriviaApi<Box<dyn DataStore + Send>>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: SharedApi,
}

impl AppState {
    pub fn new(api: TriviaApi<Box<dyn DataStore + Send>>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }
}

/// A failed request, rendered as `{success: false, error, message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: Some(detail.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "server error",
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        let status = match err.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::NOT_FOUND, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail.unwrap_or_default();
        if self.status.is_server_error() {
            error!(status = %self.status, %detail, "request failed");
        } else {
            warn!(status = %self.status, %detail, "request rejected");
        }

        // Store failures stay in the log; clients only see the status text.
        let detail = (!self.status.is_server_error()).then_some(detail);
        let body = ErrorResponse::new(self.status.as_u16(), status_message(self.status), detail);
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unknown routes
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "No such route")
}

/// Known routes hit with a method they do not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not supported on this route",
    )
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoriesPayload> {
    let payload = state.api.lock().list_categories()?;
    Ok(Json(payload))
}

pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<QuestionsPayload> {
    let Query(query) = query?;
    let payload = state.api.lock().list_questions(query.page())?;
    Ok(Json(payload))
}

pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<QuestionId>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<DeletedPayload> {
    let Path(id) = id?;
    let Query(query) = query?;
    let payload = state.api.lock().delete_question(id, query.page())?;
    Ok(Json(payload))
}

pub async fn create_question(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionDraft>, JsonRejection>,
) -> ApiResult<CreatedPayload> {
    let Query(query) = query?;
    let Json(draft) = body?;
    let payload = state.api.lock().create_question(draft, query.page())?;
    Ok(Json(payload))
}

pub async fn search_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<QuestionsPayload> {
    let Query(query) = query?;
    let Json(request) = body?;
    let payload = state
        .api
        .lock()
        .search_questions(request.search_term.as_deref(), query.page())?;
    Ok(Json(payload))
}

pub async fn category_questions(
    State(state): State<AppState>,
    id: Result<Path<CategoryId>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<QuestionsPayload> {
    let Path(id) = id?;
    let Query(query) = query?;
    let payload = state.api.lock().category_questions(id, query.page())?;
    Ok(Json(payload))
}

pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<QuizPayload> {
    let Json(request) = body?;
    let quiz = request.into_state().ok_or_else(|| {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "quiz_category.id must be a category id (0 for any)",
        )
    })?;
    let payload = state.api.lock().next_quiz_question(&quiz)?;
    Ok(Json(payload))
}
