use axum::{extract::State, Json};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

// One inbound request, one service call, no request memory. Malformed
// bodies never get here: the Json extractor rejects them first (400/415)
// and the router answers wrong methods (405).
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = state.chat.chat(payload.message.as_deref()).await?;
    Ok(Json(ChatResponse { message }))
}
