//! # Support Chat Handler
//!
//! The chat endpoint validates the request shape and hands it to the assistant. Once a
//! request is well-formed the reply is always a 200: model failures surface as the
//! assistant's apology payload, never as an HTTP error.

use super::{AppError, AppState};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use formaid::{SupportChatRequest, SupportChatResponse};
use tracing::info;

/// Handler for `POST /support-chat`.
pub async fn support_chat_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<SupportChatRequest>, JsonRejection>,
) -> Result<Json<SupportChatResponse>, AppError> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "The 'message' field must be a non-empty string.".to_string(),
        ));
    }
    info!(
        page_path = %request.page_path,
        language = %request.language,
        history = request.conversation_history.len(),
        "Received support chat request."
    );

    let response = app_state.assistant.respond(&request).await;
    Ok(Json(response))
}
