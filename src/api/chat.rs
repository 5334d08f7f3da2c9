//! Chat Endpoints

use crate::models::{ChatRequest, ChatResponse};
use super::{client, ApiError};

pub async fn send_chat_message(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    client().post("/chat/chat", request).await
}
