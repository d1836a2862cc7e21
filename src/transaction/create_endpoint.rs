//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{AppState, stores::TransactionStore};

use super::validate::parse_new_transaction;

/// A route handler for creating a new transaction.
///
/// The request body is validated field by field before the store is touched;
/// the first failing field is reported back as a 400 with `{message, field}`.
/// On success the created transaction, including its assigned ID, is returned
/// with status 201.
pub async fn create_transaction_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
    Json(body): Json<Value>,
) -> Response {
    let new_transaction = match parse_new_transaction(&body) {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.create(new_transaction) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_response(),
    }
}
