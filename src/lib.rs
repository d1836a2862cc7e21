//! Tally is a web app for tracking personal income and expenses.
//!
//! This library provides a JSON REST API over a single table of transactions,
//! plus the statistics endpoint that powers the dashboard: totals, balance and
//! a per-category expense breakdown, recomputed from a fresh read on every
//! query.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
pub mod endpoints;
mod logging;
mod routing;
mod stats;
mod stores;
mod transaction;

pub use app_state::{AppState, SqlAppState, create_app_state};
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use stats::{FinanceStats, compute_stats};
pub use stores::{SqliteTransactionStore, TransactionStore};
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionType, seed_demo_data,
};

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
    /// A request body failed schema validation.
    ///
    /// `field` names the first field that failed its check so the client can
    /// highlight the offending input. The message is surfaced verbatim.
    #[error("invalid value for field \"{field}\": {message}")]
    Validation {
        /// The first field that failed validation.
        field: &'static str,
        /// A human-readable description of what was wrong with the value.
        message: String,
    },

    /// The requested transaction could not be found.
    ///
    /// Only raised at the API layer, for identifiers that are not well-formed
    /// integers. The store itself treats deleting an absent row as a no-op.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message, "field": field })),
            )
                .into_response(),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Transaction not found" })),
            )
                .into_response(),
            // SQL errors are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
