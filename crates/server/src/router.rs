use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/support-chat", post(handlers::support_chat_handler))
        .route(
            "/support-chat/knowledge",
            get(handlers::knowledge_search_handler),
        )
        .route(
            "/support-chat/knowledge/{id}",
            get(handlers::knowledge_entry_handler),
        )
        .route("/validate-field", post(handlers::validate_field_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
