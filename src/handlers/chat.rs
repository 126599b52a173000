// POST /api/chat handler

use bytes::Bytes;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::completion::CompletionRequest;
use crate::error::ApiError;
use crate::models::ChatRequest;
use crate::state::AppState;

pub async fn chat_handler(state: AppState, body: Bytes) -> Result<Response, Infallible> {
    tracing::info!("POST /api/chat");

    match forward_conversation(&state, &body).await {
        // Provider body is passed through byte for byte
        Ok(completion) => Ok(warp::reply::with_status(
            warp::reply::with_header(completion.to_vec(), "content-type", "application/json"),
            StatusCode::OK,
        )
        .into_response()),
        Err(e) => Ok(e.into_response()),
    }
}

async fn forward_conversation(state: &AppState, body: &[u8]) -> Result<Bytes, ApiError> {
    let messages = super::parse_body::<ChatRequest>(body)?
        .messages
        .ok_or_else(|| ApiError::Validation("messages is required".to_string()))?;

    tracing::debug!(turns = messages.len(), "Forwarding conversation");

    let completion = state
        .completion
        .complete(CompletionRequest::new(messages))
        .await?;

    Ok(completion)
}
