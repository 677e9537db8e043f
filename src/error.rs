//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client supplied a missing or incorrect username/password pair.
    ///
    /// This error is produced before any store access occurs, so a rejected
    /// request never reads or writes the backing file.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No transaction with the requested ID exists in the store.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// The store holds no transactions, so there is no maximum or minimum.
    #[error("the transaction store is empty")]
    EmptyStore,

    /// A stored row was missing a field or held a value that could not be
    /// coerced to the field's type.
    ///
    /// One bad row fails the entire load; there is no skip-and-continue.
    #[error("malformed transaction record: {0}")]
    InvalidRecord(String),

    /// The header row of the backing file did not name the expected fields.
    #[error("unexpected transaction store header: {0}")]
    InvalidHeader(String),

    /// The backing file was missing, unreadable, or unwritable.
    #[error("could not access the transaction store: {0}")]
    StoreIo(String),

    /// A previous panic left the store lock unusable.
    #[error("the transaction store lock was poisoned")]
    LockPoisoned,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"payledger\"")],
                Json(json!({ "error": Error::InvalidCredentials.to_string() })),
            )
                .into_response(),
            Error::NotFound | Error::EmptyStore => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            // The remaining errors are server-side faults whose details are
            // not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "something went wrong, check the server logs for more details"
                    })),
                )
                    .into_response()
            }
        }
    }
}
