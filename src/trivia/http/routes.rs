//! HTTP API Route Definitions

use axum::{
    routing::{delete, get, post, MethodRouter},
    Router,
};

use super::handlers::{self, AppState};

/// Create the API router with all routes
///
/// Every method router gets the JSON 405 fallback; the router-level fallback
/// only sees paths that match no route at all.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", json_405(get(handlers::health)))
        .route("/categories", json_405(get(handlers::list_categories)))
        .route(
            "/categories/:id/questions",
            json_405(get(handlers::category_questions)),
        )
        .route(
            "/questions",
            json_405(get(handlers::list_questions).post(handlers::create_question)),
        )
        .route(
            "/questions/search",
            json_405(post(handlers::search_questions)),
        )
        .route("/questions/:id", json_405(delete(handlers::delete_question)))
        .route("/quizzes", json_405(post(handlers::next_quiz_question)))
        .fallback(handlers::not_found)
        .with_state(app_state)
}

fn json_405(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::method_not_allowed)
}
