//! API error type and its mapping to HTTP responses

use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::completion::CompletionError;
use crate::models::ErrorResponse;
use crate::store::StoreError;

/// Errors returned by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed caller input
    #[error("{0}")]
    Validation(String),

    /// The store connection was never established
    #[error("message store is unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// A store operation failed
    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// The provider call failed
    #[error("completion request failed: {0}")]
    Proxy(#[from] CompletionError),
}

impl ApiError {
    /// Classify a store error, tagging operation failures with `context`
    ///
    /// ```
    /// use chatserv::error::ApiError;
    /// use chatserv::store::StoreError;
    ///
    /// let err = ApiError::from_store("failed to save message")(StoreError::Database("boom".into()));
    /// assert_eq!(err.status().as_u16(), 500);
    /// ```
    pub fn from_store(context: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| {
            if source.is_unavailable() {
                ApiError::StoreUnavailable(source)
            } else {
                ApiError::Persistence { context, source }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Persistence { .. } | ApiError::Proxy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Server-side failures keep their details in the log.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::StoreUnavailable(_) => "message store is unavailable".to_string(),
            ApiError::Persistence { context, .. } => context.to_string(),
            ApiError::Proxy(_) => "failed to get a response from the completion provider".to_string(),
        }
    }

    /// Log the error and render it as a JSON response
    pub fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        error_reply(status, self.public_message())
    }
}

/// Render `{"error": message}` with the given status
pub fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}
