//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, stores::TransactionStore};

use super::core::TransactionId;

/// A route handler for deleting a transaction by its ID.
///
/// An ID that does not parse as an integer yields a 404 without touching the
/// store. A well-formed ID always yields a 204, whether or not a transaction
/// with that ID existed; the store treats deleting an absent row as a no-op.
pub async fn delete_transaction_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<TransactionId>() else {
        return Error::NotFound.into_response();
    };

    match state.transaction_store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
