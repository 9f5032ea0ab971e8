use axum::{routing::get, Router};

use crate::handlers;
use crate::types::AppState;

/// Build the application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/wiki/:title", get(handlers::handle_entry))
        .route("/search", get(handlers::handle_search))
        .route("/new", get(handlers::handle_new_form).post(handlers::handle_new_submit))
        .route("/edit/:title", get(handlers::handle_edit_form).post(handlers::handle_edit_submit))
        .route("/random", get(handlers::handle_random))
        .route("/static/*path", get(handlers::handle_static))
        .with_state(state)
}
