// Route definitions

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures_util::{pin_mut, Stream, StreamExt};
use std::convert::Infallible;
use std::path::PathBuf;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::error::error_reply;
use crate::handlers;
use crate::state::AppState;

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Request body exceeded [`MAX_BODY_BYTES`]
#[derive(Debug)]
pub struct BodyTooLarge;

impl warp::reject::Reject for BodyTooLarge {}

/// The request body could not be read from the connection
#[derive(Debug)]
pub struct BodyReadFailed(pub String);

impl warp::reject::Reject for BodyReadFailed {}

/// Build the full route tree
///
/// API routes are tried first; with `static_dir` set, `GET /` serves
/// `chat.html` and any other GET falls back to files in that directory.
pub fn configure_routes(state: AppState, static_dir: Option<PathBuf>) -> BoxedFilter<(Response,)> {
    let api = api_routes(state);

    let routes = match static_dir {
        Some(dir) => api.or(static_files(dir)).unify().boxed(),
        None => api,
    };

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    routes
        .recover(handle_rejection)
        .with(cors)
        .map(into_response)
        .boxed()
}

fn api_routes(state: AppState) -> BoxedFilter<(Response,)> {
    // GET /messages
    let list_messages = warp::path("messages")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::list_messages_handler);

    // POST /messages
    let create_message = warp::path("messages")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(raw_body())
        .and_then(handlers::create_message_handler);

    // POST /api/chat
    let chat = warp::path("api")
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state))
        .and(raw_body())
        .and_then(handlers::chat_handler);

    list_messages
        .or(create_message)
        .unify()
        .or(chat)
        .unify()
        .boxed()
}

fn static_files(dir: PathBuf) -> BoxedFilter<(Response,)> {
    let index = warp::get()
        .and(warp::path::end())
        .and(warp::fs::file(dir.join("chat.html")));

    index
        .or(warp::fs::dir(dir))
        .unify()
        .map(into_response)
        .boxed()
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

// Bodies are parsed in the handlers so bad JSON becomes a validation error.
// Works with or without Content-Length; a missing body reads as empty.
fn raw_body() -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::header::optional::<u64>("content-length")
        .and(warp::body::stream())
        .and_then(read_limited)
}

async fn read_limited<S, B>(content_length: Option<u64>, body: S) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    if content_length.is_some_and(|len| len > MAX_BODY_BYTES) {
        return Err(warp::reject::custom(BodyTooLarge));
    }

    pin_mut!(body);
    let mut collected = BytesMut::new();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| warp::reject::custom(BodyReadFailed(e.to_string())))?;
        if (collected.len() + chunk.remaining()) as u64 > MAX_BODY_BYTES {
            return Err(warp::reject::custom(BodyTooLarge));
        }
        collected.put(chunk);
    }

    Ok(collected.freeze())
}

fn into_response<R: Reply>(reply: R) -> Response {
    reply.into_response()
}

/// Turn unmatched requests into JSON errors
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found")
    } else if err.find::<BodyTooLarge>().is_some() {
        // Body rejections come from a route that matched; check them before
        // the 405 that sibling routes add for the same path
        (StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
    } else if let Some(BodyReadFailed(reason)) = err.find::<BodyReadFailed>() {
        tracing::warn!(%reason, "Failed to read request body");
        (StatusCode::BAD_REQUEST, "failed to read request body")
    } else if err.find::<warp::reject::InvalidHeader>().is_some() {
        (StatusCode::BAD_REQUEST, "invalid request header")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        tracing::error!(rejection = ?err, "Unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    };

    tracing::warn!(status = status.as_u16(), "{}", message);
    Ok(error_reply(status, message))
}
