use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::domain::{ChatReply, ChatRequest};

use super::super::Container;

/// `POST /chat`. Always answers 200 once the body has been accepted by the
/// `Json` extractor; provider failures travel in the `error` field.
pub async fn chat(
    State(container): State<Arc<Container>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatReply> {
    let use_case = container.chat_use_case();
    Json(use_case.execute(request).await)
}
