// POST /messages handler

use bytes::Bytes;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::error::ApiError;
use crate::models::{NewMessageRequest, StatusResponse};
use crate::state::AppState;

pub async fn create_message_handler(state: AppState, body: Bytes) -> Result<Response, Infallible> {
    tracing::info!("POST /messages");

    match create_message(&state, &body).await {
        Ok(()) => Ok(
            warp::reply::with_status(warp::reply::json(&StatusResponse::ok()), StatusCode::OK)
                .into_response(),
        ),
        Err(e) => Ok(e.into_response()),
    }
}

async fn create_message(state: &AppState, body: &[u8]) -> Result<(), ApiError> {
    // Validate before touching the store so bad input never reaches it
    let message = super::parse_body::<NewMessageRequest>(body)?
        .validate()
        .map_err(ApiError::Validation)?;

    let store = state
        .store
        .get()
        .map_err(ApiError::from_store("failed to save message"))?;

    let stored = store
        .insert(message)
        .await
        .map_err(ApiError::from_store("failed to save message"))?;

    tracing::debug!(id = %stored.id, sender = %stored.sender, "Stored message");
    Ok(())
}
