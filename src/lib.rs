//! Spendtrack is a web app for tracking personal expenses, budgets and
//! recurring payments.
//!
//! This library provides a JSON REST API and serves the static dashboard that
//! consumes it. All records live in an in-process store that is lost on
//! restart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod analytics;
mod app_state;
mod auth;
mod budget;
mod endpoints;
mod expense;
mod export;
mod extract;
mod logging;
mod models;
mod pagination;
mod recurring;
mod routing;
mod schedule;
mod stores;
#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, TokenConfig};
pub use logging::logging_middleware;
pub use pagination::PaginationConfig;
pub use routing::build_router;
pub use stores::{Store, memory::MemoryStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body or query string failed validation.
    ///
    /// The message should name the offending field so the client can surface
    /// it next to the right input.
    #[error("{0}")]
    Validation(String),

    /// A registration or profile update used an email that belongs to
    /// another user.
    #[error("User already exists")]
    EmailTaken,

    /// The email/password combination did not match a registered user.
    ///
    /// Deliberately does not distinguish an unknown email from a wrong
    /// password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The bearer token was missing, malformed, expired, or signed with the
    /// wrong key.
    #[error("Invalid token")]
    InvalidToken,

    /// Signing a new bearer token failed.
    #[error("Token creation error")]
    TokenCreation,

    /// The requested resource was not found.
    ///
    /// Also returned when the resource exists but belongs to another user,
    /// so that clients cannot probe for other users' records.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to process a recurring item that has been deactivated.
    #[error("Recurring item is not active")]
    InactiveRecurring,

    /// The requested feature is intentionally not implemented.
    #[error("{0}")]
    Unsupported(&'static str),

    /// An error occurred while serializing records as CSV.
    #[error("could not serialize as CSV: {0}")]
    CsvError(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::Validation(_) | Error::EmailTaken | Error::InactiveRecurring => {
                StatusCode::BAD_REQUEST
            }
            Error::InvalidCredentials | Error::InvalidToken => StatusCode::UNAUTHORIZED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            Error::TokenCreation | Error::CsvError(_) | Error::HashingError(_) => {
                tracing::error!("An unexpected error occurred: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match status {
            // Internal details should only show up in the server logs.
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_owned(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
