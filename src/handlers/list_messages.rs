// GET /messages handler

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_messages_handler(state: AppState) -> Result<Response, Infallible> {
    tracing::info!("GET /messages");

    let result = match state.store.get() {
        Ok(store) => store.list_all().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(messages) => {
            tracing::debug!(count = messages.len(), "Loaded messages");
            Ok(warp::reply::with_status(warp::reply::json(&messages), StatusCode::OK).into_response())
        }
        Err(e) => Ok(ApiError::from_store("failed to load messages")(e).into_response()),
    }
}
